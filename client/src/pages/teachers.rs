//! Teacher table.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::Teacher;

use crate::components::back_button::BackButton;
use crate::components::delete_button::DeleteButton;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::table_status::{Notice, TableStatus};
use crate::state::auth::AuthState;
use crate::state::table::TableState;
use crate::util::auth::install_unauth_redirect;
use crate::util::table::{delete_row, install_table_loader};

const LOAD_FAILED_MESSAGE: &str = "Nepodařilo se načíst data učitelů.";

#[component]
pub fn TeachersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = RwSignal::new(TableState::<Teacher>::default());

    install_unauth_redirect(auth, use_navigate());
    install_table_loader(auth, table, LOAD_FAILED_MESSAGE);

    let visible = Memo::new(move |_| table.with(TableState::page_view));
    let on_query = Callback::new(move |query: String| table.update(|t| t.set_query(query)));
    let on_prev = Callback::new(move |()| table.update(TableState::prev_page));
    let on_next = Callback::new(move |()| table.update(TableState::next_page));
    let on_dismiss = Callback::new(move |()| table.update(TableState::dismiss_notice));
    let on_delete = Callback::new(move |id: i64| delete_row(auth, table, id));

    view! {
        <section class="records">
            <h1 class="records__title">"Učitelé"</h1>
            <SearchBar
                placeholder="Hledat podle jména nebo příjmení učitele"
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
                            <th>"Vymazat"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get().items
                            key=|teacher| teacher.id
                            children=move |teacher: Teacher| {
                                view! {
                                    <tr>
                                        <td>{teacher.id}</td>
                                        <td>{teacher.name}</td>
                                        <td>{teacher.surname}</td>
                                        <td><DeleteButton id=teacher.id on_delete=on_delete/></td>
                                    </tr>
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
