//! Registration page: full profile form with per-field validation.
//!
//! ARCHITECTURE
//! ============
//! Client-side checks fill an error map keyed by the backend's own field
//! names, so server-reported field errors land in the same slots. A
//! successful registration does not log the user in; the backend returns no
//! token, so the flow ends at the login screen.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, UserKind};
use crate::state::session::SessionState;
use crate::util::guard::{RouteKind, install_guard};

/// The raw form values, assembled from the input signals at submit time.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub nombre: String,
    pub apellido: String,
    pub cedula: String,
    pub numero_telefono: String,
    pub correo_electronico: String,
    pub fecha_nacimiento: String,
    pub residencia: String,
    pub tipo_usuario: UserKind,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Required-field checks plus the password match. Returns one
    /// `(field, message)` pair per violation; empty means the form may be
    /// sent. Field keys are the backend's parameter names.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();
        if self.nombre.trim().is_empty() {
            errors.push(("nombre", "El nombre es obligatorio"));
        }
        if self.apellido.trim().is_empty() {
            errors.push(("apellido", "El apellido es obligatorio"));
        }
        if self.cedula.trim().is_empty() {
            errors.push(("cedula", "La cédula es obligatoria"));
        }
        if self.numero_telefono.trim().is_empty() {
            errors.push(("numero_telefono", "El número de teléfono es obligatorio"));
        }
        if self.correo_electronico.trim().is_empty() {
            errors.push(("correo_electronico", "El correo electrónico es obligatorio"));
        }
        if self.fecha_nacimiento.trim().is_empty() {
            errors.push(("fecha_nacimiento", "La fecha de nacimiento es obligatoria"));
        }
        if self.residencia.trim().is_empty() {
            errors.push(("residencia", "La residencia es obligatoria"));
        }
        if self.password.is_empty() {
            errors.push(("contraseña", "La contraseña es obligatoria"));
        }
        if self.password != self.confirm_password {
            errors.push(("confirmar_contraseña", "Las contraseñas no coinciden"));
        }
        errors
    }

    /// Wire payload for `POST /api/auth/registrar`.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            nombre: self.nombre.trim().to_owned(),
            apellido: self.apellido.trim().to_owned(),
            cedula: self.cedula.trim().to_owned(),
            numero_telefono: self.numero_telefono.trim().to_owned(),
            correo_electronico: self.correo_electronico.trim().to_owned(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
            residencia: self.residencia.trim().to_owned(),
            password: self.password.clone(),
            tipo_usuario: self.tipo_usuario,
        }
    }
}

/// Map a `<select>` value onto an account category.
pub fn user_kind_from_value(value: &str) -> UserKind {
    match value {
        "empresa" => UserKind::Empresa,
        "gobierno" => UserKind::Gobierno,
        _ => UserKind::Persona,
    }
}

#[component]
fn FormField(
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<BTreeMap<String, String>>,
) -> impl IntoView {
    let error = move || errors.get().get(name).cloned();
    view! {
        <label class="auth-field">
            <span class="auth-field__label">{label}</span>
            <input
                class="auth-input"
                class:auth-input--invalid=move || error().is_some()
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error().is_some()>
                <span class="auth-field__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteKind::AuthOnly, navigate.clone());

    let nombre = RwSignal::new(String::new());
    let apellido = RwSignal::new(String::new());
    let cedula = RwSignal::new(String::new());
    let numero_telefono = RwSignal::new(String::new());
    let correo_electronico = RwSignal::new(String::new());
    let fecha_nacimiento = RwSignal::new(String::new());
    let residencia = RwSignal::new(String::new());
    let tipo_usuario = RwSignal::new(UserKind::Persona);
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let general = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_login = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            nombre: nombre.get(),
            apellido: apellido.get(),
            cedula: cedula.get(),
            numero_telefono: numero_telefono.get(),
            correo_electronico: correo_electronico.get(),
            fecha_nacimiento: fecha_nacimiento.get(),
            residencia: residencia.get(),
            tipo_usuario: tipo_usuario.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        general.set(String::new());

        let local = form.validate();
        if !local.is_empty() {
            errors.set(local.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect());
            return;
        }
        errors.set(BTreeMap::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate_login = navigate_login.clone();
            let request = form.to_request();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(()) => {
                        navigate_login("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(ApiError::Fields(field_errors)) => {
                        errors.set(
                            field_errors.into_iter().map(|e| (e.param, e.msg)).collect(),
                        );
                        busy.set(false);
                    }
                    Err(e) => {
                        general.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&form, &navigate_login);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Crear una cuenta en Rifácil"</h1>
                <p class="auth-card__subtitle">
                    "Preparate para acceder y ser el protagonista dentro de nuestra plataforma"
                </p>
                <Show when=move || !general.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || general.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <FormField name="nombre" label="Nombre" value=nombre errors=errors />
                    <FormField name="apellido" label="Apellido" value=apellido errors=errors />
                    <FormField name="cedula" label="Cédula de identidad" value=cedula errors=errors />
                    <FormField
                        name="numero_telefono"
                        label="Número de teléfono"
                        input_type="tel"
                        value=numero_telefono
                        errors=errors
                    />
                    <FormField
                        name="correo_electronico"
                        label="Correo electrónico"
                        input_type="email"
                        value=correo_electronico
                        errors=errors
                    />
                    <FormField
                        name="fecha_nacimiento"
                        label="Fecha de nacimiento"
                        input_type="date"
                        value=fecha_nacimiento
                        errors=errors
                    />
                    <FormField
                        name="residencia"
                        label="Dirección de residencia"
                        value=residencia
                        errors=errors
                    />
                    <label class="auth-field">
                        <span class="auth-field__label">"Tipo de Usuario"</span>
                        <select
                            class="auth-input"
                            on:change=move |ev| {
                                tipo_usuario.set(user_kind_from_value(&event_target_value(&ev)));
                            }
                        >
                            <option value="persona">"Persona"</option>
                            <option value="empresa">"Empresa"</option>
                            <option value="gobierno">"Gobierno"</option>
                        </select>
                    </label>
                    <FormField
                        name="contraseña"
                        label="Contraseña"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <FormField
                        name="confirmar_contraseña"
                        label="Confirmar contraseña"
                        input_type="password"
                        value=confirm_password
                        errors=errors
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Procesando..." } else { "Continuar" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿Ya tienes una cuenta? "
                    <a class="auth-link" href="/login">"Inicia sesión"</a>
                </p>
            </div>
        </div>
    }
}
