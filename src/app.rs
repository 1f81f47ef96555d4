//! App Shell
//!
//! Route table for the board screens plus session context provision. The
//! create/edit routes exist as navigation targets only; their forms are a
//! separate feature and fall through to the not-found view for now.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{BoardDetail, BoardList};
use crate::session::{self, SessionContext};

#[component]
pub fn App() -> impl IntoView {
    // Read once at startup; the backend sets the cookie on login, which
    // always goes through a full page load.
    let (token, _set_token) = signal(session::token_from_document());
    provide_context(SessionContext::new(token));

    view! {
        <Router>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=BoardList/>
                    <Route path=path!("/board") view=BoardList/>
                    <Route path=path!("/board/:id") view=BoardDetail/>
                </Routes>
            </main>
        </Router>
    }
}
