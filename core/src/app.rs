//! App bootstrap: wires the client, a transport and the document together.
//!
//! # Design
//! `App` owns the only mutable UI state, the current `View`, plus the
//! `Document` it renders into. Every mutation ends in `init`, which
//! re-fetches the list and re-renders both regions, so the page always
//! reflects the latest successful fetch.
//!
//! Reads that render are split into `begin_*` / `finish_*` around the
//! transport call. Each `begin_*` issues a `Ticket` from a monotonic
//! counter; `finish_*` renders only if no newer ticket has rendered yet.
//! A host that overlaps requests therefore gets last-issued-wins rather
//! than last-resolved-wins, and a newer read that fails does not block an
//! older one that succeeds. The synchronous operations are built from the
//! same pairs.

use crate::client::RosterClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::form::{render_creation_form, FormData, FORM_ID};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::markup::{Action, Element, Node};
use crate::types::{Entry, EntryDraft};
use crate::view::{render_title, View, PAGE_TITLE};

/// Proof of issue for one rendering read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    entry: Option<i64>,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// The three regions the app writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: Option<Node>,
    main: Element,
    form: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: None,
            main: Element::new("main"),
            form: Element::new("form").attr("id", FORM_ID),
        }
    }
}

impl Document {
    pub fn title(&self) -> Option<&Node> {
        self.title.as_ref()
    }

    pub fn main(&self) -> Node {
        self.main.clone().into()
    }

    pub fn form(&self) -> Node {
        self.form.clone().into()
    }

    fn replace_main(&mut self, nodes: Vec<Node>) {
        self.main.children = nodes;
    }

    fn replace_form(&mut self, nodes: Vec<Node>) {
        self.form.children = nodes;
    }

    /// The full page as HTML.
    pub fn to_html(&self) -> String {
        let title = self.title.as_ref().map(Node::to_html).unwrap_or_default();
        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{PAGE_TITLE}</title></head><body>{title}{}{}</body></html>",
            self.main().to_html(),
            self.form().to_html(),
        )
    }
}

pub struct App<T> {
    client: RosterClient,
    transport: T,
    document: Document,
    view: View,
    issued: u64,
    rendered: u64,
}

impl<T: Transport> App<T> {
    pub fn new(client: RosterClient, transport: T) -> Self {
        Self {
            client,
            transport,
            document: Document::default(),
            view: View::default(),
            issued: 0,
            rendered: 0,
        }
    }

    pub fn from_config(config: &Config, transport: T) -> Self {
        Self::new(RosterClient::new(&config.base_url()), transport)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Insert the page title. Runs once; repeat calls do nothing.
    pub fn decorate(&mut self) {
        if self.document.title.is_none() {
            self.document.title = Some(render_title());
        }
    }

    /// Fetch the list, render it (or the empty message), re-render the form.
    pub fn init(&mut self) {
        let (ticket, request) = self.begin_fetch_all();
        let result = self.transport.execute(request);
        self.finish_fetch_all(ticket, result);
    }

    /// All entries in server order, or `None` after logging the failure.
    pub fn fetch_all_entries(&self) -> Option<Vec<Entry>> {
        let result = self.transport.execute(self.client.build_list_entries());
        self.entries_from(result)
    }

    pub fn begin_fetch_all(&mut self) -> (Ticket, HttpRequest) {
        (self.issue(None), self.client.build_list_entries())
    }

    /// Renders the list unless a newer read already rendered. Returns
    /// whether it rendered.
    pub fn finish_fetch_all(&mut self, ticket: Ticket, result: Result<HttpResponse, ApiError>) -> bool {
        let entries = self.entries_from(result);
        if !self.claim(ticket) {
            log::debug!("dropping stale player list (request {})", ticket.seq);
            return false;
        }
        self.render_entry_list(entries.unwrap_or_default());
        self.render_creation_form();
        true
    }

    /// Show one entry's detail. On failure the current view stays.
    pub fn fetch_single_entry(&mut self, id: i64) -> Result<(), ApiError> {
        let (ticket, request) = self.begin_fetch_single(id);
        let result = self.transport.execute(request);
        self.finish_fetch_single(ticket, result).map(|_| ())
    }

    pub fn begin_fetch_single(&mut self, id: i64) -> (Ticket, HttpRequest) {
        (self.issue(Some(id)), self.client.build_get_entry(id))
    }

    /// Renders the detail unless a newer read already rendered. `Ok(false)`
    /// means the response was fine but stale.
    pub fn finish_fetch_single(
        &mut self,
        ticket: Ticket,
        result: Result<HttpResponse, ApiError>,
    ) -> Result<bool, ApiError> {
        let id = ticket.entry.unwrap_or_default();
        let entry = match result.and_then(|response| self.client.parse_get_entry(response)) {
            Ok(entry) => entry,
            Err(err) => {
                log::error!("trouble fetching player #{id}: {err}");
                return Err(err);
            }
        };
        if !self.claim(ticket) {
            log::debug!("dropping stale detail for player #{id} (request {})", ticket.seq);
            return Ok(false);
        }
        self.render_entry_detail(entry);
        Ok(true)
    }

    /// Create an entry, then refresh. On failure nothing is re-rendered.
    pub fn add_entry(&mut self, draft: &EntryDraft) -> Result<Entry, ApiError> {
        let result = self
            .client
            .build_create_entry(draft)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_entry(response));
        match result {
            Ok(entry) => {
                log::info!("added player #{} ({})", entry.id, entry.name);
                self.init();
                Ok(entry)
            }
            Err(err) => {
                log::error!("trouble adding player {:?}: {err}", draft.name);
                Err(err)
            }
        }
    }

    /// Delete an entry, then refresh.
    ///
    /// A `success: false` body comes back as `ApiError::Rejected` and skips
    /// the refresh, leaving the current list on screen.
    pub fn remove_entry(&mut self, id: i64) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_delete_entry(id))
            .and_then(|response| self.client.parse_delete_entry(response));
        match result {
            Ok(()) => {
                log::info!("removed player #{id}");
                self.init();
                Ok(())
            }
            Err(err) if err.is_rejection() => {
                log::warn!("server refused to remove player #{id}: {err}");
                Err(err)
            }
            Err(err) => {
                log::error!("trouble removing player #{id} from the roster: {err}");
                Err(err)
            }
        }
    }

    /// Handle a button press.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ApiError> {
        match action {
            Action::ShowDetails(id) => self.fetch_single_entry(id),
            Action::Delete(id) => self.remove_entry(id),
            Action::Back => {
                self.init();
                Ok(())
            }
        }
    }

    /// Handle a submission of the new-player form.
    pub fn submit(&mut self, form: &FormData) -> Result<Entry, ApiError> {
        let draft = EntryDraft::from_form(form);
        self.add_entry(&draft)
    }

    pub fn render_entry_list(&mut self, entries: Vec<Entry>) {
        let view = std::mem::take(&mut self.view).show_list(entries);
        self.set_view(view);
    }

    pub fn render_entry_detail(&mut self, entry: Entry) {
        let view = std::mem::take(&mut self.view).show_details(entry);
        self.set_view(view);
    }

    pub fn render_creation_form(&mut self) {
        self.document.replace_form(render_creation_form());
    }

    fn set_view(&mut self, view: View) {
        self.document.replace_main(view.render());
        self.view = view;
    }

    fn entries_from(&self, result: Result<HttpResponse, ApiError>) -> Option<Vec<Entry>> {
        match result.and_then(|response| self.client.parse_list_entries(response)) {
            Ok(entries) => Some(entries),
            Err(err) => {
                log::error!("trouble fetching players: {err}");
                None
            }
        }
    }

    fn issue(&mut self, entry: Option<i64>) -> Ticket {
        self.issued += 1;
        Ticket {
            seq: self.issued,
            entry,
        }
    }

    /// Record `ticket` as the latest render, unless a newer one already
    /// rendered. Failed reads never claim, so they cannot starve older ones.
    fn claim(&mut self, ticket: Ticket) -> bool {
        if ticket.seq <= self.rendered {
            return false;
        }
        self.rendered = ticket.seq;
        true
    }
}
