//! Interactive table browser.
//!
//! Drives the same paginated tables as `obj list` / `req list`, but
//! keeps the [`ListController`] alive between commands so paging,
//! searching and inline edits behave like the dashboard: one row at a
//! time in edit mode, cancel restores the row exactly as drawn, and
//! every successful mutation re-fetches with the current query.

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use colored::Colorize;

use mimix_client::Session;
use mimix_core::error::AuthError;
use mimix_core::table::{ListController, Row, TableRow};
use mimix_core::types::RecordId;
use mimix_core::{
    Error, MimixObject, NewObject, NewRequest, ObjectPatch, ObjectRequest, RequestPatch,
};

use super::{form_date_field, obj, parse_edit_date, req};
use crate::output;
use crate::session::{self, storage};

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Which table to browse
    #[arg(value_enum, default_value_t = Table::Obj)]
    pub table: Table,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Table {
    /// Tracked objects
    Obj,
    /// Promotion requests
    Req,
}

pub async fn run(args: BrowseArgs) -> Result<()> {
    let session = session::require_session().await?;

    match args.table {
        Table::Obj => browse(&session, ObjectsView).await,
        Table::Req => browse(&session, RequestsView).await,
    }
}

/// One browsable table: its columns, which of them are editable, and
/// the API calls behind each browser action.
trait BrowseView {
    type Record: TableRow;

    const HEADERS: &'static [&'static str];
    const EMPTY_NOTICE: &'static str;
    /// Key and help line for the view-specific action (open a request
    /// for an object, convert a request).
    const EXTRA_KEY: &'static str;
    const EXTRA_HELP: &'static str;

    fn editable(&self, column: usize) -> bool;

    async fn fetch(&self, session: &Session, query: &str) -> mimix_core::Result<Vec<Self::Record>>;
    async fn save(&self, session: &Session, record: &Self::Record, fields: &[String])
    -> Result<()>;
    async fn delete(&self, session: &Session, id: &RecordId) -> mimix_core::Result<()>;
    async fn extra(&self, session: &Session, id: &RecordId) -> Result<String>;
    async fn create(&self, session: &Session) -> Result<String>;
}

struct ObjectsView;

impl BrowseView for ObjectsView {
    type Record = MimixObject;

    const HEADERS: &'static [&'static str] = obj::HEADERS;
    const EMPTY_NOTICE: &'static str = "No objects found.";
    const EXTRA_KEY: &'static str = "r";
    const EXTRA_HELP: &'static str = "r N      open a promotion request for row N";

    fn editable(&self, _column: usize) -> bool {
        true
    }

    async fn fetch(&self, session: &Session, query: &str) -> mimix_core::Result<Vec<MimixObject>> {
        session.list_objects(query).await
    }

    async fn save(
        &self,
        session: &Session,
        record: &MimixObject,
        fields: &[String],
    ) -> Result<()> {
        let mut patch = ObjectPatch::from_record(record);
        patch.obj = fields[0].clone();
        patch.obj_type = fields[1].clone();
        patch.promote_date = parse_edit_date(&fields[2])?;
        patch.lib = fields[3].clone();
        patch.obj_ver = fields[4].clone();
        patch.mimix_status = fields[5].parse()?;
        patch.developer = fields[6].clone();
        patch.keterangan = fields[7].clone();

        session.update_object(&record.id, &patch).await?;
        Ok(())
    }

    async fn delete(&self, session: &Session, id: &RecordId) -> mimix_core::Result<()> {
        session.delete_object(id).await
    }

    async fn extra(&self, session: &Session, id: &RecordId) -> Result<String> {
        session.add_object_to_request(id).await?;
        Ok(format!("Request opened for object {}", id))
    }

    async fn create(&self, session: &Session) -> Result<String> {
        let new = NewObject {
            obj: output::prompt_with_default("Object", "")?,
            obj_type: output::prompt_with_default("Type", "")?,
            lib: output::prompt_with_default("Lib", "")?,
            promote_date: form_date_field(Some(&output::prompt_with_default(
                "Promote date (dd/mm/yyyy)",
                "",
            )?))?,
            obj_ver: output::prompt_with_default("Version", "")?,
            developer: output::prompt_with_default("Developer", "")?,
            mimix_status: output::prompt_with_default("Status", "pending")?.parse()?,
            keterangan: match output::prompt_with_default("Notes", "")? {
                s if s.is_empty() => None,
                s => Some(s),
            },
        };

        let created = session.create_object(&new).await?;
        Ok(format!("Object {} created", created.obj))
    }
}

struct RequestsView;

impl BrowseView for RequestsView {
    type Record = ObjectRequest;

    const HEADERS: &'static [&'static str] = req::HEADERS;
    const EMPTY_NOTICE: &'static str = "No requests found.";
    const EXTRA_KEY: &'static str = "c";
    const EXTRA_HELP: &'static str = "c N      convert row N into a tracked object";

    // requester and updated_at are server-owned
    fn editable(&self, column: usize) -> bool {
        !matches!(column, 1 | 2)
    }

    async fn fetch(
        &self,
        session: &Session,
        query: &str,
    ) -> mimix_core::Result<Vec<ObjectRequest>> {
        session.list_requests(query).await
    }

    async fn save(
        &self,
        session: &Session,
        record: &ObjectRequest,
        fields: &[String],
    ) -> Result<()> {
        let mut patch = RequestPatch::from_record(record);
        patch.obj_name = fields[0].clone();
        patch.lib = fields[3].clone();
        patch.obj_ver = fields[4].clone();
        patch.obj_type = fields[5].clone();
        patch.promote_date = parse_edit_date(&fields[6])?;
        patch.developer = fields[7].clone();
        patch.promote_status = fields[8].parse()?;
        patch.req_status = fields[9].parse()?;

        session.update_request(&record.id, &patch).await?;
        Ok(())
    }

    async fn delete(&self, session: &Session, id: &RecordId) -> mimix_core::Result<()> {
        session.delete_request(id).await
    }

    async fn extra(&self, session: &Session, id: &RecordId) -> Result<String> {
        let object = session.convert_request(id).await?;
        Ok(format!("Request converted into object {}", object.obj))
    }

    async fn create(&self, session: &Session) -> Result<String> {
        let new = NewRequest {
            obj_name: output::prompt_with_default("Object", "")?,
            lib: output::prompt_with_default("Lib", "")?,
            obj_ver: output::prompt_with_default("Version", "")?,
            obj_type: output::prompt_with_default("Type", "")?,
            promote_date: form_date_field(Some(&output::prompt_with_default(
                "Promote date (dd/mm/yyyy)",
                "",
            )?))?,
            developer: output::prompt_with_default("Developer", "")?,
        };

        let created = session.create_request(&new).await?;
        Ok(format!("Request for {} created", created.obj_name))
    }
}

async fn browse<V: BrowseView>(session: &Session, view: V) -> Result<()> {
    let mut table: ListController<V::Record> = ListController::new(V::EMPTY_NOTICE);

    refresh(session, &view, &mut table, "").await?;
    render::<V>(&table);
    eprintln!("{}", "Type h for help, q to quit.".dimmed());

    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => render::<V>(&table),
            "q" => break,
            "h" | "?" => help::<V>(),
            "s" => {
                refresh(session, &view, &mut table, rest).await?;
                render::<V>(&table);
            }
            "f" => {
                let query = table.query().to_string();
                refresh(session, &view, &mut table, &query).await?;
                render::<V>(&table);
            }
            "n" => {
                if !table.next_page() {
                    eprintln!("Already on the last page.");
                }
                render::<V>(&table);
            }
            "p" => {
                if !table.prev_page() {
                    eprintln!("Already on the first page.");
                }
                render::<V>(&table);
            }
            "g" => {
                match rest.parse::<usize>() {
                    Ok(page) => {
                        if !table.set_page(page) {
                            eprintln!(
                                "Page {} is out of range ({} page(s) available).",
                                page,
                                table.total_pages().max(1)
                            );
                        }
                    }
                    Err(_) => eprintln!("Usage: g <page>"),
                }
                render::<V>(&table);
            }
            "e" => {
                edit_row(session, &view, &mut table, rest).await?;
                render::<V>(&table);
            }
            "d" => {
                if let Some(id) = row_id(&table, rest) {
                    if output::confirm(&format!("This will delete {}. Continue?", id), false)? {
                        match view.delete(session, &id).await {
                            Ok(()) => {
                                output::success("Deleted");
                                let query = table.query().to_string();
                                refresh(session, &view, &mut table, &query).await?;
                            }
                            Err(e) => action_failed(e.into()).await?,
                        }
                    }
                }
                render::<V>(&table);
            }
            "a" => {
                match view.create(session).await {
                    Ok(message) => {
                        output::success(&message);
                        let query = table.query().to_string();
                        refresh(session, &view, &mut table, &query).await?;
                    }
                    Err(e) => action_failed(e).await?,
                }
                render::<V>(&table);
            }
            key if key == V::EXTRA_KEY => {
                if let Some(id) = row_id(&table, rest) {
                    match view.extra(session, &id).await {
                        Ok(message) => {
                            output::success(&message);
                            let query = table.query().to_string();
                            refresh(session, &view, &mut table, &query).await?;
                        }
                        Err(e) => action_failed(e).await?,
                    }
                }
                render::<V>(&table);
            }
            other => eprintln!("Unknown command '{}'. Type h for help.", other),
        }
    }

    Ok(())
}

/// Fetch and replace the cache. Transport and API failures render as an
/// inline error row; a rejected token ends the browser and clears the
/// stored session.
async fn refresh<V: BrowseView>(
    session: &Session,
    view: &V,
    table: &mut ListController<V::Record>,
    query: &str,
) -> Result<()> {
    match view.fetch(session, query).await {
        Ok(records) => table.set_records(records, query),
        Err(Error::Auth(AuthError::Unauthorized)) => {
            storage::clear_session().await?;
            bail!("Session expired or rejected. Run 'mimix login' again.");
        }
        Err(e) => table.set_error(e.to_string()),
    }
    Ok(())
}

/// Report a failed browser action (save, delete, create, convert).
///
/// A rejected token ends the browser just like a failed fetch: the
/// stored session is cleared and the user is told to log in again.
/// Anything else is shown inline and the loop continues.
async fn action_failed(e: anyhow::Error) -> Result<()> {
    if matches!(
        e.downcast_ref::<Error>(),
        Some(Error::Auth(AuthError::Unauthorized))
    ) {
        storage::clear_session().await?;
        bail!("Session expired or rejected. Run 'mimix login' again.");
    }

    output::error(&e.to_string());
    Ok(())
}

fn render<V: BrowseView>(table: &ListController<V::Record>) {
    println!();
    output::table(V::HEADERS, &table.page_rows());
    output::page_strip(table.page_strip().as_ref());
}

/// Resolve a 1-based row number on the current page to a record id.
fn row_id<R: TableRow>(table: &ListController<R>, arg: &str) -> Option<RecordId> {
    let n: usize = match arg.parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            eprintln!("Expected a row number, e.g. 'e 2'.");
            return None;
        }
    };

    match table.page_rows().get(n - 1) {
        Some(Row::Display { id, .. }) | Some(Row::Edit { id, .. }) => Some(id.clone()),
        _ => {
            eprintln!("No row {} on this page.", n);
            None
        }
    }
}

/// The inline-edit flow: switch the row into edit mode, prompt each
/// editable field with the current value as default, then save or
/// cancel. Cancel puts the row back exactly as it was drawn.
async fn edit_row<V: BrowseView>(
    session: &Session,
    view: &V,
    table: &mut ListController<V::Record>,
    arg: &str,
) -> Result<()> {
    let Some(id) = row_id(table, arg) else {
        return Ok(());
    };

    let Some(defaults) = table.begin_edit(&id).map(|r| r.edit_cells()) else {
        return Ok(());
    };

    render::<V>(table);

    let mut fields = Vec::with_capacity(defaults.len());
    for (column, default) in defaults.iter().enumerate() {
        if view.editable(column) {
            fields.push(output::prompt_with_default(V::HEADERS[column], default)?);
        } else {
            fields.push(default.clone());
        }
    }

    if !output::confirm("Save changes?", false)? {
        table.cancel_edit(&id);
        eprintln!("Edit cancelled.");
        return Ok(());
    }

    let saved = {
        let Some(record) = table.find(&id) else {
            table.cancel_edit(&id);
            return Ok(());
        };
        view.save(session, record, &fields).await
    };

    match saved {
        Ok(()) => {
            table.finish_edit(&id);
            output::success("Saved");
            let query = table.query().to_string();
            refresh(session, view, table, &query).await?;
        }
        Err(e) => {
            table.cancel_edit(&id);
            action_failed(e).await?;
        }
    }

    Ok(())
}

fn help<V: BrowseView>() {
    eprintln!("Commands:");
    eprintln!("  s TEXT   search (s alone clears the query)");
    eprintln!("  f        re-fetch with the current query");
    eprintln!("  n / p    next / previous page");
    eprintln!("  g N      go to page N");
    eprintln!("  e N      edit row N inline");
    eprintln!("  d N      delete row N");
    eprintln!("  {}", V::EXTRA_HELP);
    eprintln!("  a        add a new record");
    eprintln!("  h        this help");
    eprintln!("  q        quit");
}
