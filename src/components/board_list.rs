//! Board List Screen
//!
//! Loads every entry, joins in the comment counts, and renders a paginated
//! table. Opening an entry fires the view increment (unless the viewer is
//! the author) and navigates to the detail screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, abort::AbortHandle};
use crate::components::Pagination;
use crate::enrich::{self, BoardRow};
use crate::models::User;
use crate::paging;
use crate::permissions;
use crate::session::SessionContext;

#[component]
pub fn BoardList() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let navigate = use_navigate();

    let (rows, set_rows) = signal(Vec::<BoardRow>::new());
    let (current_user, set_current_user) = signal(Option::<User>::None);
    let (page, set_page) = signal(1usize);
    let (load_error, set_load_error) = signal(Option::<&'static str>::None);

    let list_abort = AbortHandle::new();
    let user_abort = AbortHandle::new();

    // Load entries on mount, then fan out for the comment counts. The
    // enriched list commits all-or-nothing; a single failed count keeps
    // the table as-is and shows the error banner instead.
    Effect::new(move |_| {
        let signal = list_abort.renew();
        spawn_local(async move {
            let boards = match api::list_boards(signal.as_ref()).await {
                Ok(boards) => boards,
                Err(err) if err.is_abort() => return,
                Err(err) => {
                    log::error!("[BoardList] failed to load entries: {err}");
                    set_load_error.set(Some("Could not load the board list."));
                    return;
                }
            };
            let counted = enrich::with_comment_counts(boards, signal).await;
            match enrich::require_all(counted) {
                Ok(loaded) => {
                    log::info!("[BoardList] loaded {} entries", loaded.len());
                    set_rows.set(loaded);
                    set_load_error.set(None);
                }
                Err(err) if err.is_abort() => {}
                Err(err) => {
                    log::error!("[BoardList] failed to load comment counts: {err}");
                    set_load_error.set(Some("Could not load the board list."));
                }
            }
        });
    });

    // Resolve the viewer when a session token is present. Only used for
    // the self-view-exclusion check on title clicks.
    Effect::new(move |_| {
        let Some(token) = session.token.get() else {
            return;
        };
        let signal = user_abort.renew();
        spawn_local(async move {
            match api::current_user(&token, signal.as_ref()).await {
                Ok(user) => set_current_user.set(Some(user)),
                Err(err) if err.is_abort() => {}
                Err(err) => log::error!("[BoardList] failed to resolve current user: {err}"),
            }
        });
    });

    let visible = move || paging::page_slice(&rows.get(), page.get(), paging::PAGE_SIZE);

    let nav_write = navigate.clone();

    view! {
        <div class="board-list">
            <h1>"Interview Review Board"</h1>
            <p class="board-intro">
                "Share how your mock and real interviews went. Honest reviews help everyone."
            </p>

            {move || load_error.get().map(|msg| view! { <p class="load-error">{msg}</p> })}

            <div class="board-toolbar">
                <button on:click=move |_| nav_write("/board/new", Default::default())>
                    "Write"
                </button>
            </div>

            <table class="board-table">
                <thead>
                    <tr>
                        <th>"No."</th>
                        <th>"Title"</th>
                        <th>"Author"</th>
                        <th>"Date"</th>
                        <th>"Views"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|row| row.board.board_number
                        children=move |row| {
                            let navigate = navigate.clone();
                            let board = row.board.clone();
                            let id = board.board_number;
                            // Fire-and-forget increment, then navigate without
                            // waiting for it to land.
                            let open = move |_| {
                                let viewer = current_user.get();
                                if permissions::should_count_view(viewer.as_ref(), &board) {
                                    spawn_local(async move {
                                        if let Err(err) = api::increment_view(id).await {
                                            log::warn!(
                                                "[BoardList] view increment for {id} failed: {err}"
                                            );
                                        }
                                    });
                                }
                                navigate(&format!("/board/{id}"), Default::default());
                            };

                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>
                                        <button class="board-title" on:click=open>
                                            {row.board.board_title.clone()}
                                            <span class="comment-count">
                                                " (" {row.comment_count} ")"
                                            </span>
                                        </button>
                                    </td>
                                    <td>
                                        {match row.board.board_writer_profile.clone() {
                                            Some(url) => view! {
                                                <img class="avatar" src=url alt="Profile"/>
                                            }.into_any(),
                                            None => view! {
                                                <span class="avatar-placeholder">"No Image"</span>
                                            }.into_any(),
                                        }}
                                        <span class="author">
                                            {row.board.board_writer_nickname.clone()}
                                        </span>
                                    </td>
                                    <td>{row.board.board_write_date.clone()}</td>
                                    <td>{row.board.board_click_count}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Pagination
                page=page
                set_page=set_page
                total=Signal::derive(move || rows.get().len())
            />
        </div>
    }
}
