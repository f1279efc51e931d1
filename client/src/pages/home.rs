//! Root route: forwards to the signed-in user's area, or to the login page.

use leptos::prelude::*;

use crate::util::auth;

/// Home page. Carries no UI of its own; on the client it immediately
/// redirects based on the stored access token's profile.
#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(move || {
        let route = auth::current_profile()
            .map_or(auth::LOGIN_ROUTE, |profile| profile.landing_path());
        auth::redirect(route);
    });

    view! { <div class="redirect-page"></div> }
}
