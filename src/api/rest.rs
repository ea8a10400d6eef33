use actix_web::{
    delete, get, middleware::Logger, post, put,
    web::{self, Bytes, Data, Json, JsonConfig, Path, PathConfig, Query, QueryConfig},
    App, HttpResponse, HttpServer,
};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex as TokioMutex;

use crate::{
    api::{
        errors::ApiError,
        validation::{
            validated, ComposeRequest, ContactQuery, ContactsViewRequest, EditsPayload, MailboxQuery,
            MailboxViewRequest, ReviewRequest,
        },
    },
    config::Settings,
    mailbox::Mailbox,
    models::{MailEdits, Reviewer},
};

/// Shared state handed to every handler. The mailbox sits behind a single
/// lock so commands never interleave.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub mailbox: Arc<TokioMutex<Mailbox>>,
}

impl AppState {
    pub fn new(settings: Settings, mailbox: Mailbox) -> Self {
        Self {
            settings: Arc::new(settings),
            mailbox: Arc::new(TokioMutex::new(mailbox)),
        }
    }
}

// --- Route Configuration ---

pub fn configure_rest_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest { message: err.to_string() }.into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest { message: err.to_string() }.into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest { message: err.to_string() }.into()
            }))
            // Mail operations
            .service(list_mails)
            .service(unread_count)
            .service(get_mail)
            .service(compose_draft)
            .service(save_draft)
            .service(tag_for_review)
            .service(send_mail)
            .service(delete_draft)
            // Contact operations
            .service(list_contacts)
            .service(get_contact)
            .service(list_conversations)
            // Selection
            .service(get_selection)
            .service(update_mailbox_view)
            .service(update_contacts_view)
            .service(select_mail)
            .service(select_contact)
            .service(select_conversation)
            .service(clear_mail_selection)
            .service(clear_selection)
            // Form options
            .service(get_options),
    );
}

pub async fn run_server(settings: Settings, mailbox: Mailbox) -> std::io::Result<()> {
    let bind_address = settings.bind_address();
    let state = Data::new(AppState::new(settings, mailbox));

    info!("Starting REST server on {}:{}", bind_address.0, bind_address.1);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure_rest_service)
    })
    .bind(bind_address)?
    .run()
    .await
}

// === Mail Operations ===

#[get("/mails")]
async fn list_mails(state: Data<AppState>, query: Query<MailboxQuery>) -> Result<HttpResponse, ApiError> {
    let mailbox = state.mailbox.lock().await;
    let mails = mailbox.filter_mails(query.category, query.section);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "mails": mails,
        "total": mails.len(),
    })))
}

// Registered before `/mails/{id}` so "unread" is not taken for an id
#[get("/mails/unread")]
async fn unread_count(state: Data<AppState>, query: Query<MailboxQuery>) -> Result<HttpResponse, ApiError> {
    let mailbox = state.mailbox.lock().await;
    let count = mailbox.unread_count(query.category, query.section);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "category": query.category,
        "section": query.section,
        "count": count,
    })))
}

#[get("/mails/{id}")]
async fn get_mail(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mailbox = state.mailbox.lock().await;
    let mail = mailbox.get_mail(&id)?;
    Ok(HttpResponse::Ok().json(mail))
}

#[post("/mails")]
async fn compose_draft(state: Data<AppState>, payload: Json<ComposeRequest>) -> Result<HttpResponse, ApiError> {
    let request = validated(payload.into_inner())?;
    info!("Handling POST /mails ({})", request.category);

    let mut mailbox = state.mailbox.lock().await;
    let draft = mailbox.compose_draft(request.category, &MailEdits::from(request.edits));

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/v1/mails/{}", draft.id)))
        .json(draft))
}

#[put("/mails/{id}")]
async fn save_draft(
    state: Data<AppState>,
    path: Path<String>,
    payload: Json<EditsPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let edits = MailEdits::from(validated(payload.into_inner())?);
    info!("Handling PUT /mails/{}", id);

    let mut mailbox = state.mailbox.lock().await;
    let mail = mailbox.save_draft(&id, &edits)?;
    Ok(HttpResponse::Ok().json(mail))
}

#[post("/mails/{id}/review")]
async fn tag_for_review(
    state: Data<AppState>,
    path: Path<String>,
    payload: Json<ReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = validated(payload.into_inner())?;
    info!("Handling POST /mails/{}/review", id);

    let mut mailbox = state.mailbox.lock().await;
    let mail = mailbox.tag_for_review(&id, &MailEdits::from(request.edits), &request.reviewer)?;
    Ok(HttpResponse::Ok().json(mail))
}

#[post("/mails/{id}/send")]
async fn send_mail(state: Data<AppState>, path: Path<String>, body: Bytes) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    // An absent body means "send as is"; anything else must parse
    let edits = if body.iter().all(u8::is_ascii_whitespace) {
        MailEdits::default()
    } else {
        let payload: EditsPayload = serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest {
            message: format!("Json deserialize error: {}", e),
        })?;
        MailEdits::from(validated(payload)?)
    };
    info!("Handling POST /mails/{}/send", id);

    let mut mailbox = state.mailbox.lock().await;
    let mail = mailbox.send(&id, &edits)?;
    Ok(HttpResponse::Ok().json(mail))
}

#[delete("/mails/{id}")]
async fn delete_draft(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    info!("Handling DELETE /mails/{}", id);

    let mut mailbox = state.mailbox.lock().await;
    mailbox.delete_draft(&id)?;
    Ok(HttpResponse::NoContent().finish())
}

// === Contact Operations ===

#[get("/contacts")]
async fn list_contacts(state: Data<AppState>, query: Query<ContactQuery>) -> Result<HttpResponse, ApiError> {
    let mailbox = state.mailbox.lock().await;
    let contacts = mailbox.filter_contacts(&query.search, query.category);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "contacts": contacts,
        "total": contacts.len(),
    })))
}

#[get("/contacts/{id}")]
async fn get_contact(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mailbox = state.mailbox.lock().await;
    let contact = mailbox.get_contact(&id)?;
    Ok(HttpResponse::Ok().json(contact))
}

#[get("/contacts/{id}/conversations")]
async fn list_conversations(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mailbox = state.mailbox.lock().await;
    mailbox.get_contact(&id)?;
    let conversations = mailbox.get_conversations(&id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "contact_id": id,
        "conversations": conversations,
        "total": conversations.len(),
    })))
}

// === Selection ===

#[get("/selection")]
async fn get_selection(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mailbox = state.mailbox.lock().await;
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[put("/selection/mailbox")]
async fn update_mailbox_view(
    state: Data<AppState>,
    payload: Json<MailboxViewRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();
    debug!("Handling PUT /selection/mailbox: {:?}", request);

    let mut mailbox = state.mailbox.lock().await;
    if let Some(category) = request.category {
        mailbox.set_category(category);
    }
    if let Some(section) = request.section {
        mailbox.set_section(section);
    }
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[put("/selection/contacts")]
async fn update_contacts_view(
    state: Data<AppState>,
    payload: Json<ContactsViewRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(payload.into_inner())?;
    debug!("Handling PUT /selection/contacts: {:?}", request);

    let mut mailbox = state.mailbox.lock().await;
    if let Some(search) = request.search {
        mailbox.set_search_term(search);
    }
    if let Some(category) = request.category {
        mailbox.set_filter_category(category);
    }
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[post("/selection/mail/{id}")]
async fn select_mail(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mailbox = state.mailbox.lock().await;
    mailbox.select_mail(&id)?;
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[post("/selection/contact/{id}")]
async fn select_contact(state: Data<AppState>, path: Path<String>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let mut mailbox = state.mailbox.lock().await;
    mailbox.select_contact(&id)?;
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[post("/selection/contact/{id}/conversation/{conversation_id}")]
async fn select_conversation(
    state: Data<AppState>,
    path: Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (contact_id, conversation_id) = path.into_inner();
    let mut mailbox = state.mailbox.lock().await;
    mailbox.select_conversation(&contact_id, &conversation_id)?;
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[delete("/selection/mail")]
async fn clear_mail_selection(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut mailbox = state.mailbox.lock().await;
    mailbox.clear_mail_selection();
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

#[delete("/selection")]
async fn clear_selection(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut mailbox = state.mailbox.lock().await;
    mailbox.clear_selection();
    Ok(HttpResponse::Ok().json(mailbox.snapshot()))
}

// === Form Options ===

#[derive(Serialize)]
struct ReviewerOption {
    value: Reviewer,
    label: &'static str,
}

#[get("/options")]
async fn get_options(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let reviewers: Vec<ReviewerOption> = Reviewer::ALL
        .into_iter()
        .map(|value| ReviewerOption {
            value,
            label: value.label(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "reviewers": reviewers,
        "senders": state.settings.compose.senders,
    })))
}
