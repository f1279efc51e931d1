//! Login page: credential form, remember-me, password reset dialog, and the
//! decorative sky backdrop.

use leptos::prelude::*;

use crate::components::starfield::Starfield;
use crate::config::AppConfig;
use crate::util::auth;

/// Form feedback line with an error flag for styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Feedback {
    text: String,
    is_error: bool,
}

impl Feedback {
    fn class(&self) -> &'static str {
        if self.text.is_empty() {
            "message"
        } else if self.is_error {
            "message message--error"
        } else {
            "message message--success"
        }
    }
}

/// Login page. Visitors with a valid stored token skip straight to their
/// area.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(Feedback::default());

    let show_forgot = RwSignal::new(false);
    let forgot_email = RwSignal::new(String::new());
    let forgot_busy = RwSignal::new(false);
    let forgot_message = RwSignal::new(Feedback::default());

    // Already signed in: forward to the stored profile's area. Also preset
    // the remember-me checkbox from the last login.
    Effect::new(move || {
        if let Some(profile) = auth::current_profile() {
            auth::redirect(profile.landing_path());
            return;
        }
        remember.set(auth::remember_mode());
    });

    let base_url = config.api_base_url.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(not(feature = "hydrate"))]
        let _ = &base_url;
        #[cfg(feature = "hydrate")]
        {
            let email = email.get_untracked().trim().to_owned();
            let senha = senha.get_untracked().trim().to_owned();
            let remember_me = remember.get_untracked();
            let base_url = base_url.clone();

            message.set(Feedback::default());
            busy.set(true);

            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&base_url, &email, &senha).await;
                busy.set(false);
                match outcome {
                    Ok(tokens) => {
                        auth::save_tokens(
                            &tokens.access_token,
                            &tokens.refresh_token,
                            remember_me,
                        );
                        match auth::current_profile() {
                            Some(profile) => {
                                message.set(Feedback {
                                    text: "Login realizado com sucesso.".to_owned(),
                                    is_error: false,
                                });
                                auth::redirect(profile.landing_path());
                            }
                            None => {
                                message.set(Feedback {
                                    text: "Perfil sem area configurada no frontend.".to_owned(),
                                    is_error: true,
                                });
                            }
                        }
                    }
                    Err(text) => message.set(Feedback { text, is_error: true }),
                }
            });
        }
    };

    let forgot_base_url = config.api_base_url.clone();
    let on_forgot_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(not(feature = "hydrate"))]
        let _ = &forgot_base_url;
        #[cfg(feature = "hydrate")]
        {
            let email = forgot_email.get_untracked().trim().to_owned();
            if email.is_empty() {
                forgot_message.set(Feedback {
                    text: "Informe um email valido.".to_owned(),
                    is_error: true,
                });
                return;
            }
            let base_url = forgot_base_url.clone();

            forgot_message.set(Feedback::default());
            forgot_busy.set(true);

            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::forgot_password(&base_url, &email).await;
                forgot_busy.set(false);
                match outcome {
                    Ok(text) => forgot_message.set(Feedback { text, is_error: false }),
                    Err(text) => forgot_message.set(Feedback { text, is_error: true }),
                }
            });
        }
    });

    let open_forgot = move |_| {
        forgot_message.set(Feedback::default());
        forgot_email.set(email.get_untracked());
        show_forgot.set(true);
    };

    view! {
        <div class="login-page">
            <Starfield/>

            <form class="login-card" on:submit=on_submit>
                <h1>"StockFlow"</h1>
                <p class="login-card__subtitle">"Gestao de armazem"</p>

                <label class="field">
                    "Email"
                    <input
                        type="email"
                        name="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="field">
                    "Senha"
                    <div class="field__password">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            name="senha"
                            required
                            prop:value=move || senha.get()
                            on:input=move |ev| senha.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="field__toggle"
                            aria-label=move || {
                                if show_password.get() { "Ocultar senha" } else { "Mostrar senha" }
                            }
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                </label>

                <label class="field field--inline">
                    <input
                        type="checkbox"
                        name="remember_me"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Manter conectado"
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                </button>

                <button class="btn btn--link" type="button" on:click=open_forgot>
                    "Esqueci minha senha"
                </button>

                <p class=move || message.get().class()>{move || message.get().text}</p>
            </form>

            <Show when=move || show_forgot.get()>
                <div class="dialog-backdrop" on:click=move |_| show_forgot.set(false)>
                    <form
                        class="dialog"
                        on:click=|ev| ev.stop_propagation()
                        on:submit=move |ev| on_forgot_submit.run(ev)
                    >
                        <h2>"Redefinir senha"</h2>
                        <label class="field">
                            "Email"
                            <input
                                type="email"
                                prop:value=move || forgot_email.get()
                                on:input=move |ev| forgot_email.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| show_forgot.set(false)
                            >
                                "Fechar"
                            </button>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || forgot_busy.get()
                            >
                                {move || if forgot_busy.get() { "Enviando..." } else { "Enviar email" }}
                            </button>
                        </div>
                        <p class=move || forgot_message.get().class()>
                            {move || forgot_message.get().text}
                        </p>
                    </form>
                </div>
            </Show>
        </div>
    }
}
