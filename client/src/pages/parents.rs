//! Parent table with contact columns.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::Parent;

use crate::components::back_button::BackButton;
use crate::components::delete_button::DeleteButton;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::table_status::{Notice, TableStatus};
use crate::state::auth::AuthState;
use crate::state::table::TableState;
use crate::util::auth::install_unauth_redirect;
use crate::util::table::{delete_row, install_table_loader};

const LOAD_FAILED_MESSAGE: &str = "Nepodařilo se načíst data o rodičích.";

#[component]
pub fn ParentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let table = RwSignal::new(TableState::<Parent>::default());

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
            <h1 class="records__title">"Rodiče"</h1>
            <SearchBar
                placeholder="Hledat podle jména rodiče, emailu nebo tel."
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
                            <th>"Jméno a příjmení"</th>
                            <th>"Email"</th>
                            <th>"Číslo"</th>
                            <th>"Vymazat"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get().items
                            key=|parent| parent.id
                            children=move |parent: Parent| {
                                let name = parent.display_name();
                                view! {
                                    <tr>
                                        <td>{parent.id}</td>
                                        <td>{name}</td>
                                        <td>{parent.email}</td>
                                        <td>{parent.phone}</td>
                                        <td><DeleteButton id=parent.id on_delete=on_delete/></td>
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
