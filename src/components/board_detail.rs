//! Board Detail Screen
//!
//! Shows a single entry with its comments. The entry, the comment list,
//! and the current user load independently; a failure in one never blocks
//! the others. Edit/delete render only for the author (display gate only,
//! the backend enforces ownership on its own).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{self, abort::AbortHandle};
use crate::components::CommentSection;
use crate::models::{Board, Comment, User};
use crate::permissions;
use crate::session::SessionContext;

/// Blocking notice for the destructive delete action
fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

#[component]
pub fn BoardDetail() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let navigate = use_navigate();
    let params = use_params_map();
    let board_id =
        Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok())));

    let (board, set_board) = signal(Option::<Board>::None);
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (comments_error, set_comments_error) = signal(false);
    let (current_user, set_current_user) = signal(Option::<User>::None);
    let (load_error, set_load_error) = signal(Option::<&'static str>::None);

    let board_abort = AbortHandle::new();
    let comments_abort = AbortHandle::new();
    let user_abort = AbortHandle::new();

    // Entry fetch, keyed on the route id
    Effect::new(move |_| {
        let Some(id) = board_id.get() else {
            return;
        };
        let signal = board_abort.renew();
        spawn_local(async move {
            match api::get_board(id, signal.as_ref()).await {
                Ok(entry) => {
                    set_board.set(Some(entry));
                    set_load_error.set(None);
                }
                Err(err) if err.is_abort() => {}
                Err(err) => {
                    log::error!("[BoardDetail] failed to load entry {id}: {err}");
                    set_load_error.set(Some("Could not load this post."));
                }
            }
        });
    });

    // Comment fetch, independent of the entry fetch
    Effect::new(move |_| {
        let Some(id) = board_id.get() else {
            return;
        };
        let signal = comments_abort.renew();
        spawn_local(async move {
            match api::list_comments(id, signal.as_ref()).await {
                Ok(loaded) => {
                    set_comments.set(loaded);
                    set_comments_error.set(false);
                }
                Err(err) if err.is_abort() => {}
                Err(err) => {
                    log::error!("[BoardDetail] failed to load comments for {id}: {err}");
                    set_comments_error.set(true);
                }
            }
        });
    });

    // Viewer identity, keyed on the session token
    Effect::new(move |_| {
        let Some(token) = session.token.get() else {
            return;
        };
        let signal = user_abort.renew();
        spawn_local(async move {
            match api::current_user(&token, signal.as_ref()).await {
                Ok(user) => set_current_user.set(Some(user)),
                Err(err) if err.is_abort() => {}
                Err(err) => log::error!("[BoardDetail] failed to resolve current user: {err}"),
            }
        });
    });

    let editable =
        move || board.get().is_some_and(|entry| permissions::can_edit(current_user.get().as_ref(), &entry));

    let on_edit = {
        let navigate = navigate.clone();
        move |_| {
            if let Some(id) = board_id.get() {
                navigate(&format!("/board/edit/{id}"), Default::default());
            }
        }
    };

    // Success alerts and returns to the list; failure alerts and stays.
    let on_delete = {
        let navigate = navigate.clone();
        move |_| {
            let Some(id) = board_id.get() else {
                return;
            };
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::delete_board(id).await {
                    Ok(()) => {
                        alert("The post has been deleted.");
                        navigate("/board", Default::default());
                    }
                    Err(err) => {
                        log::error!("[BoardDetail] failed to delete entry {id}: {err}");
                        alert("Failed to delete the post.");
                    }
                }
            });
        }
    };

    let on_back = {
        let navigate = navigate.clone();
        move |_| navigate("/board", Default::default())
    };

    view! {
        <div class="board-detail">
            {move || load_error.get().map(|msg| view! { <p class="load-error">{msg}</p> })}

            {move || match board.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(entry) => view! {
                    <article>
                        <h1>{entry.board_title.clone()}</h1>
                        <p class="meta">
                            "By " {entry.board_writer_nickname.clone()}
                            " on " {entry.board_write_date.clone()}
                        </p>
                        <p class="body">{entry.board_content.clone()}</p>
                        {entry.board_image.clone().map(|url| view! {
                            <img class="attachment" src=url alt="Attached image"/>
                        })}
                    </article>
                }.into_any(),
            }}

            <div class="detail-actions">
                <Show when=editable>
                    <button on:click=on_edit.clone()>"Edit"</button>
                    <button class="danger" on:click=on_delete.clone()>"Delete"</button>
                </Show>
                <button on:click=on_back.clone()>"Back to list"</button>
            </div>

            <CommentSection
                board_id=board_id
                comments=comments
                set_comments=set_comments
                load_error=comments_error
            />
        </div>
    }
}
