use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn LoginView(
    #[prop(into)] on_login: Callback<(String, String)>,
    #[prop(into)] on_switch: Callback<()>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<&'static str>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || password.get().is_empty() {
            set_form_error.set(Some("Email and password are required"));
            return;
        }
        set_form_error.set(None);
        on_login.call((email.get().trim().to_owned(), password.get()));
    };

    view! {
        <div class="auth-screen">
            <h1>"AI Tool Discovery"</h1>
            <h2>"Sign in"</h2>
            <form on:submit=handle_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                {move || error.get().map(|message| view! {
                    <p class="auth-error">{message}</p>
                })}
                <button type="submit" disabled=pending>
                    {move || if pending.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
            <p>
                "No account yet? "
                <button class="link" on:click=move |_| on_switch.call(())>
                    "Register"
                </button>
            </p>
        </div>
    }
}
