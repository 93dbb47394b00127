//! Student table with per-row parent details.
//!
//! SYSTEM CONTEXT
//! ==============
//! The student endpoint returns a classroom-nested tree; `records` flattens it
//! before rows reach this page. At most one student's parents are expanded.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::Student;

use crate::components::back_button::BackButton;
use crate::components::delete_button::DeleteButton;
use crate::components::pagination::Pagination;
use crate::components::parent_details::ParentDetails;
use crate::components::search_bar::SearchBar;
use crate::components::table_status::{Notice, TableStatus};
use crate::state::auth::AuthState;
use crate::state::table::TableState;
use crate::util::auth::install_unauth_redirect;
use crate::util::table::{delete_row, install_table_loader};

const LOAD_FAILED_MESSAGE: &str = "Nepodařilo se načíst data studentů.";
const COLUMN_COUNT: u32 = 6;

/// Clicking the expanded row collapses it; clicking another row moves the
/// expansion there.
fn toggle_expanded(current: Option<i64>, id: i64) -> Option<i64> {
    if current == Some(id) { None } else { Some(id) }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = RwSignal::new(TableState::<Student>::default());
    let expanded = RwSignal::new(None::<i64>);

    install_unauth_redirect(auth, use_navigate());
    install_table_loader(auth, table, LOAD_FAILED_MESSAGE);

    let visible = Memo::new(move |_| table.with(TableState::page_view));
    let on_query = Callback::new(move |query: String| table.update(|t| t.set_query(query)));
    let on_prev = Callback::new(move |()| table.update(TableState::prev_page));
    let on_next = Callback::new(move |()| table.update(TableState::next_page));
    let on_dismiss = Callback::new(move |()| table.update(TableState::dismiss_notice));
    let on_delete = Callback::new(move |id: i64| {
        if expanded.get_untracked() == Some(id) {
            expanded.set(None);
        }
        delete_row(auth, table, id);
    });

    view! {
        <section class="records">
            <h1 class="records__title">"Studenti"</h1>
            <SearchBar
                placeholder="Hledat podle jména, příjmení nebo třídy"
                query=Signal::derive(move || table.with(|t| t.query.clone()))
                on_input=on_query
            />
            <Notice message=Signal::derive(move || table.with(|t| t.notice)) on_dismiss=on_dismiss/>
            <TableStatus
                loading=Signal::derive(move || table.with(|t| t.loading))
                error=Signal::derive(move || table.with(|t| t.error))
            >
                <table class="records__table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Jméno"</th>
                            <th>"Příjmení"</th>
                            <th>"Třída"</th>
                            <th>"Rodič"</th>
                            <th>"Vymazat"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get().items
                            key=|student| student.id
                            children=move |student: Student| {
                                let id = student.id;
                                let classroom = student.classroom_name().to_owned();
                                let parents = student.parents;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{student.name}</td>
                                        <td>{student.surname}</td>
                                        <td>{classroom}</td>
                                        <td>
                                            <button
                                                class="btn btn--primary btn--icon"
                                                title="Rodiče"
                                                aria-expanded=move || (expanded.get() == Some(id)).to_string()
                                                on:click=move |_| expanded.update(|e| *e = toggle_expanded(*e, id))
                                            >
                                                "🔍"
                                            </button>
                                        </td>
                                        <td><DeleteButton id=id on_delete=on_delete/></td>
                                    </tr>
                                    {move || {
                                        (expanded.get() == Some(id))
                                            .then(|| view! { <ParentDetails parents=parents.clone() colspan=COLUMN_COUNT/> })
                                    }}
                                }
                            }
                        />
                    </tbody>
                </table>
                <Pagination
                    page=Signal::derive(move || visible.get().page)
                    total_pages=Signal::derive(move || visible.get().total_pages)
                    on_prev=on_prev
                    on_next=on_next
                />
            </TableStatus>
            <BackButton/>
        </section>
    }
}
