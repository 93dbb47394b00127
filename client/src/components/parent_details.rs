//! Expanded parent contact rows for a student.

use leptos::prelude::*;
use records::Parent;

pub const NO_PARENTS_MESSAGE: &str = "Žádní rodiče k dispozici";

#[component]
pub fn ParentDetails(parents: Vec<Parent>, colspan: u32) -> impl IntoView {
    let body = if parents.is_empty() {
        view! { <div class="parent-details__empty">{NO_PARENTS_MESSAGE}</div> }.into_any()
    } else {
        view! {
            <ul class="parent-details__list">
                {parents
                    .into_iter()
                    .map(|parent| {
                        view! {
                            <li class="parent-details__item">
                                <div><strong>"Jméno: "</strong>{parent.name}</div>
                                <div><strong>"Příjmení: "</strong>{parent.surname}</div>
                                <div><strong>"Email: "</strong>{parent.email}</div>
                                <div><strong>"Telefon: "</strong>{parent.phone}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <tr class="parent-details">
            <td colspan=colspan.to_string()>{body}</td>
        </tr>
    }
}
