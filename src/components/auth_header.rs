use leptos::*;

use crate::models::user::{Role, User};

/// Top bar for the authenticated app: identity badge, the admin-only
/// mode toggle (lets an admin preview the catalog as a regular user) and
/// logout. Toggling the mode never refetches anything by itself.
#[component]
pub fn AuthHeader(
    user: User,
    admin_view: RwSignal<bool>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let role_label = match user.role {
        Role::Admin => "admin",
        Role::User => "user",
    };
    let show_toggle = user.role.can_moderate();

    view! {
        <header class="app-header">
            <h1>"AI Tool Discovery"</h1>
            <div class="identity">
                <span class="user-name">{user.name.clone()}</span>
                <span class="role-badge">{role_label}</span>
                {show_toggle.then(|| view! {
                    <button
                        class="mode-toggle"
                        class:active=move || admin_view.get()
                        on:click=move |_| admin_view.update(|v| *v = !*v)
                    >
                        {move || if admin_view.get() { "Admin Mode" } else { "User Mode" }}
                    </button>
                })}
                <button class="logout" on:click=move |_| on_logout.call(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
