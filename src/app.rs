use gloo_timers::future::TimeoutFuture;
use leptos::logging::error;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::api;
use crate::api::auth::AuthResponse;
use crate::components::admin_nav::{AdminNav, MainView};
use crate::components::auth_header::AuthHeader;
use crate::components::filters_panel::FiltersPanel;
use crate::components::login::LoginView;
use crate::components::register::RegisterView;
use crate::components::review_history::ReviewHistoryModal;
use crate::components::review_modal::ReviewModal;
use crate::components::review_moderation::ReviewModeration;
use crate::components::tool_card::ToolCard;
use crate::components::tool_modal::ToolModal;
use crate::models::fetch::FetchState;
use crate::models::filters::Filters;
use crate::models::review::{Review, ReviewStatus};
use crate::models::tool::Tool;
use crate::models::user::{Session, User};
use crate::session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    Register,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Restored once at startup; restore failure just means the auth screen.
    let session_sig: RwSignal<Option<Session>> = create_rw_signal(session::restore());
    provide_context(session_sig);

    view! {
        <Title text="AI Tool Discovery"/>
        {move || match session_sig.get() {
            None => view! { <AuthGate session=session_sig/> }.into_view(),
            Some(active) => {
                view! { <MainApp session=session_sig user=active.user/> }.into_view()
            }
        }}
    }
}

/// Login/register screens shown while no session is active.
#[component]
fn AuthGate(session: RwSignal<Option<Session>>) -> impl IntoView {
    let (screen, set_screen) = create_signal(AuthScreen::Login);
    let (pending, set_pending) = create_signal(false);
    let (auth_error, set_auth_error) = create_signal(None::<String>);

    let complete = move |response: AuthResponse| {
        let active = Session {
            user: response.user,
            token: response.token,
        };
        session::persist(&active);
        session.set(Some(active));
    };

    let handle_login = move |(email, password): (String, String)| {
        set_pending.set(true);
        set_auth_error.set(None);
        spawn_local(async move {
            match api::auth::login(&email, &password).await {
                Ok(response) => complete(response),
                Err(err) => set_auth_error.set(Some(err.to_string())),
            }
            set_pending.set(false);
        });
    };

    let handle_register = move |(name, email, password): (String, String, String)| {
        set_pending.set(true);
        set_auth_error.set(None);
        spawn_local(async move {
            match api::auth::register(&name, &email, &password).await {
                Ok(response) => complete(response),
                Err(err) => set_auth_error.set(Some(err.to_string())),
            }
            set_pending.set(false);
        });
    };

    let switch_to = move |target: AuthScreen| {
        set_screen.set(target);
        set_auth_error.set(None);
    };

    view! {
        {move || match screen.get() {
            AuthScreen::Login => view! {
                <LoginView
                    on_login=handle_login
                    on_switch=move |_| switch_to(AuthScreen::Register)
                    pending=pending
                    error=auth_error
                />
            }
            .into_view(),
            AuthScreen::Register => view! {
                <RegisterView
                    on_register=handle_register
                    on_switch=move |_| switch_to(AuthScreen::Login)
                    pending=pending
                    error=auth_error
                />
            }
            .into_view(),
        }}
    }
}

fn load_tools(target: RwSignal<FetchState<Vec<Tool>>>, filters: Filters) {
    target.set(FetchState::Loading);
    spawn_local(async move {
        match api::tools::list(&filters).await {
            Ok(tools) => target.set(FetchState::Loaded(tools)),
            Err(err) => {
                error!("[CATALOG] Fetching tools failed: {err}");
                target.set(FetchState::Failed(err.to_string()));
            }
        }
    });
}

fn load_pending(target: RwSignal<FetchState<Vec<Review>>>) {
    target.set(FetchState::Loading);
    spawn_local(async move {
        match api::reviews::list(Some(ReviewStatus::Pending)).await {
            Ok(reviews) => target.set(FetchState::Loaded(reviews)),
            Err(err) => {
                error!("[MODERATION] Fetching pending reviews failed: {err}");
                target.set(FetchState::Failed(err.to_string()));
            }
        }
    });
}

/// The authenticated application: catalog, review workflows and, for admins,
/// the moderation queue.
#[component]
fn MainApp(session: RwSignal<Option<Session>>, user: User) -> impl IntoView {
    let role = user.role;
    // Admins start in admin mode and may toggle down to preview as a user;
    // regular users can never toggle up.
    let admin_view = create_rw_signal(role.can_moderate());
    let active_view = create_rw_signal(MainView::Catalog);

    let filters = create_rw_signal(Filters::default());
    let tools = create_rw_signal(FetchState::<Vec<Tool>>::Idle);
    let pending_queue = create_rw_signal(FetchState::<Vec<Review>>::Idle);

    let show_add = create_rw_signal(false);
    let editing = create_rw_signal(None::<Tool>);
    let reviewing = create_rw_signal(None::<Tool>);
    let history = create_rw_signal(None::<Tool>);

    // One-shot action notices, auto-dismissed. A notice replaced in the
    // meantime is left alone by the stale timer.
    let notice = create_rw_signal(None::<String>);
    let show_notice = move |message: String| {
        notice.set(Some(message.clone()));
        spawn_local(async move {
            TimeoutFuture::new(4000).await;
            notice.update(|current| {
                if current.as_deref() == Some(message.as_str()) {
                    *current = None;
                }
            });
        });
    };

    // One fetch on mount (the session just became active) and one per filter
    // change. Toggling admin/user mode is deliberately not tracked here.
    create_effect(move |_| {
        let snapshot = filters.get();
        load_tools(tools, snapshot);
    });

    // The pending queue is only fetched when an admin opens the moderation
    // panel, and again after each moderation action.
    create_effect(move |_| {
        if admin_view.get() && active_view.get() == MainView::Moderation {
            load_pending(pending_queue);
        }
    });

    let handle_logout = move |()| {
        spawn_local(async move {
            session::logout().await;
            session.set(None);
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this tool?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::tools::delete(&id).await {
                Ok(()) => {
                    load_tools(tools, filters.get_untracked());
                    show_notice("Tool deleted".to_owned());
                }
                Err(err) => show_notice(err.to_string()),
            }
        });
    };

    // Approval changes the tool's average rating server-side, so every
    // moderation action refetches both the queue and the catalog.
    let handle_moderation = move |(id, status): (String, ReviewStatus)| {
        spawn_local(async move {
            match api::reviews::moderate(&id, status).await {
                Ok(_) => {
                    load_pending(pending_queue);
                    load_tools(tools, filters.get_untracked());
                    show_notice(format!("Review {status}"));
                }
                Err(err) => show_notice(err.to_string()),
            }
        });
    };

    let close_tool_modal = move || {
        show_add.set(false);
        editing.set(None);
    };

    let pending_count = Signal::derive(move || {
        pending_queue.with(|state| state.data().map(Vec::len).unwrap_or(0))
    });

    view! {
        <div class="app">
            <AuthHeader user=user.clone() admin_view=admin_view on_logout=handle_logout/>

            {move || notice.get().map(|message| view! {
                <div class="notice">{message}</div>
            })}

            <Show when=move || admin_view.get()>
                <AdminNav
                    active=active_view
                    on_select=move |view| active_view.set(view)
                    pending_count=pending_count
                />
            </Show>

            <main>
                {move || match (admin_view.get(), active_view.get()) {
                    (true, MainView::Moderation) => view! {
                        <ReviewModeration queue=pending_queue on_action=handle_moderation/>
                    }
                    .into_view(),
                    _ => view! {
                        <FiltersPanel filters=filters/>

                        <Show when=move || admin_view.get()>
                            <button class="add-tool" on:click=move |_| show_add.set(true)>
                                "+ Add New Tool"
                            </button>
                        </Show>

                        {move || tools.with(|state| state.error().map(|message| view! {
                            <div class="error-banner">{message.to_owned()}</div>
                        }))}

                        <div class="tool-grid">
                            {move || tools.with(|state| match state {
                                FetchState::Loading => {
                                    view! { <p class="loading">"Loading tools…"</p> }
                                        .into_view()
                                }
                                FetchState::Loaded(list) if list.is_empty() => view! {
                                    <p class="empty">
                                        {if admin_view.get_untracked() {
                                            "No tools found. Add some tools to get started!"
                                        } else {
                                            "No tools found. Check back later."
                                        }}
                                    </p>
                                }
                                .into_view(),
                                FetchState::Loaded(list) => list
                                    .iter()
                                    .cloned()
                                    .map(|tool| view! {
                                        <ToolCard
                                            tool=tool
                                            admin_view=admin_view
                                            on_edit=move |tool| editing.set(Some(tool))
                                            on_delete=handle_delete
                                            on_review=move |tool| reviewing.set(Some(tool))
                                            on_view_reviews=move |tool| history.set(Some(tool))
                                        />
                                    })
                                    .collect_view(),
                                _ => ().into_view(),
                            })}
                        </div>
                    }
                    .into_view(),
                }}
            </main>

            {move || {
                (show_add.get() || editing.get().is_some()).then(|| view! {
                    <ToolModal
                        editing=editing.get()
                        on_saved=move |()| {
                            close_tool_modal();
                            load_tools(tools, filters.get_untracked());
                            show_notice("Tool saved".to_owned());
                        }
                        on_cancel=move |()| close_tool_modal()
                    />
                })
            }}

            {move || reviewing.get().map(|tool| view! {
                <ReviewModal
                    tool=tool
                    on_submitted=move |()| {
                        reviewing.set(None);
                        show_notice(
                            "Review submitted. Waiting for admin approval.".to_owned(),
                        );
                    }
                    on_cancel=move |()| reviewing.set(None)
                />
            })}

            {move || history.get().map(|tool| view! {
                <ReviewHistoryModal tool=tool on_close=move |()| history.set(None)/>
            })}
        </div>
    }
}
