use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn RegisterView(
    #[prop(into)] on_register: Callback<(String, String, String)>,
    #[prop(into)] on_switch: Callback<()>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<&'static str>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || email.get().trim().is_empty() || password.get().is_empty()
        {
            set_form_error.set(Some("All fields are required"));
            return;
        }
        if password.get() != confirm.get() {
            set_form_error.set(Some("Passwords do not match"));
            return;
        }
        set_form_error.set(None);
        on_register.call((
            name.get().trim().to_owned(),
            email.get().trim().to_owned(),
            password.get(),
        ));
    };

    view! {
        <div class="auth-screen">
            <h1>"AI Tool Discovery"</h1>
            <h2>"Create an account"</h2>
            <form on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
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
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                {move || error.get().map(|message| view! {
                    <p class="auth-error">{message}</p>
                })}
                <button type="submit" disabled=pending>
                    {move || if pending.get() { "Creating account…" } else { "Register" }}
                </button>
            </form>
            <p>
                "Already registered? "
                <button class="link" on:click=move |_| on_switch.call(())>
                    "Sign in"
                </button>
            </p>
        </div>
    }
}
