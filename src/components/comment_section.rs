//! Comment Section Component
//!
//! Comment list plus the submission form. A successful post appends the
//! server-returned comment and clears the input; a failed post leaves the
//! draft in the input so it can be retried.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Comment;

#[component]
pub fn CommentSection(
    board_id: Memo<Option<u32>>,
    comments: ReadSignal<Vec<Comment>>,
    set_comments: WriteSignal<Vec<Comment>>,
    /// True when the initial comment fetch failed; an empty list then
    /// renders as a load failure, not as "no comments yet"
    load_error: ReadSignal<bool>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let (post_error, set_post_error) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = board_id.get() else {
            return;
        };
        let text = draft.get();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::post_comment(id, &text).await {
                Ok(stored) => {
                    set_comments.update(|list| list.push(stored));
                    set_draft.set(String::new());
                    set_post_error.set(false);
                }
                Err(err) => {
                    log::error!("[CommentSection] failed to post comment: {err}");
                    set_post_error.set(true);
                }
            }
        });
    };

    view! {
        <section class="comments">
            <h2>"Comments"</h2>

            <Show when=move || load_error.get()>
                <p class="load-error">"Could not load comments."</p>
            </Show>

            <For
                // Comments carry no id, so key by position; the list only
                // ever grows in place.
                each={move || comments.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, _)| *index
                children=|(_, comment): (usize, Comment)| view! {
                    <div class="comment">
                        <span class="comment-author">{comment.user}</span>
                        <p class="comment-text">{comment.text}</p>
                    </div>
                }
            />

            <Show when=move || post_error.get()>
                <p class="post-error">"Could not post your comment. Try again."</p>
            </Show>

            <form class="comment-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Post"</button>
            </form>
        </section>
    }
}
