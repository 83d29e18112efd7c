use std::future::Future;

use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::{
        action::{Action, ActionResult},
        person::Person,
    },
};

/// The only failure the gateway reports. A refused connection, a 404 and a
/// 500 all look the same to the caller, the cause is kept for debugging only.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request failed")]
    RequestFailed(#[source] anyhow::Error),
}

impl GatewayError {
    pub fn request_failed(cause: impl Into<anyhow::Error>) -> Self {
        GatewayError::RequestFailed(cause.into())
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Boundary between the admin view and the person REST service.
///
/// The gateway does no bookkeeping of its own: applying a returned record (or
/// dropping a deleted one) is up to the caller.
pub trait PersonGateway: Send + Sync {
    /// `GET {base}`
    fn list(&self) -> impl Future<Output = GatewayResult<Vec<Person>>> + Send;

    /// `GET {base}/{id}`
    fn fetch(&self, id: PersonId) -> impl Future<Output = GatewayResult<Person>> + Send;

    /// `POST {base}`, any id on `person` is ignored
    fn create(&self, person: Person) -> impl Future<Output = GatewayResult<Person>> + Send;

    /// `PUT {base}/{id}` with the full record
    fn update(
        &self,
        id: PersonId,
        person: Person,
    ) -> impl Future<Output = GatewayResult<Person>> + Send;

    /// `DELETE {base}/{id}`
    fn delete(&self, id: PersonId) -> impl Future<Output = GatewayResult<()>> + Send;
}

/// Generic action API, maps an [`Action`] to the matching typed call.
///
/// Useful when the caller queues intents (e.g. the console event loop) and
/// only wants to deal with a single result type.
pub async fn send_action<G: PersonGateway>(
    gateway: &G,
    action: Action,
) -> GatewayResult<ActionResult> {
    let result = match action {
        Action::List => ActionResult::List(gateway.list().await?),
        Action::Fetch(id) => ActionResult::Single(gateway.fetch(id).await?),
        Action::Create(person) => ActionResult::Single(gateway.create(person).await?),
        Action::Update(id, person) => ActionResult::Single(gateway.update(id, person).await?),
        Action::Delete(id) => {
            gateway.delete(id).await?;
            ActionResult::Deleted(id)
        }
    };

    Ok(result)
}
