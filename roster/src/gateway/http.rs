use anyhow::anyhow;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{consts::consts::PersonId, model::person::Person};

use super::{
    gateway::{GatewayError, GatewayResult, PersonGateway},
    options::GatewayOptions,
};

/// [`PersonGateway`] talking JSON to the person REST service
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    options: GatewayOptions,
}

impl HttpGateway {
    pub fn new(options: GatewayOptions) -> GatewayResult<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(GatewayError::request_failed)?;

        Ok(Self { client, options })
    }

    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }
}

impl PersonGateway for HttpGateway {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> GatewayResult<Vec<Person>> {
        let request = self.client.get(self.options.collection_url());

        read_json(send(request, "GET").await?).await
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: PersonId) -> GatewayResult<Person> {
        let request = self.client.get(self.options.member_url(id));

        read_json(send(request, "GET").await?).await
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, person: Person) -> GatewayResult<Person> {
        let request = self
            .client
            .post(self.options.collection_url())
            .json(&person.without_id());

        let created: Person = read_json(send(request, "POST").await?).await?;

        require_id(created)
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, id: PersonId, person: Person) -> GatewayResult<Person> {
        let request = self
            .client
            .put(self.options.member_url(id))
            .json(&person.with_id(id));

        let updated: Person = read_json(send(request, "PUT").await?).await?;

        require_id(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: PersonId) -> GatewayResult<()> {
        let request = self.client.delete(self.options.member_url(id));

        // Service answers with a plain text status, nothing to decode
        send(request, "DELETE").await?;

        Ok(())
    }
}

/// Sends the request, anything outside of 2xx is a failed request
async fn send(request: RequestBuilder, method: &str) -> GatewayResult<Response> {
    let response = request.send().await.map_err(|e| {
        log::debug!("{} request did not complete: {}", method, e);
        GatewayError::request_failed(e)
    })?;

    let status = response.status();

    if !status.is_success() {
        log::debug!("{} {} answered with {}", method, response.url(), status);
        return Err(GatewayError::request_failed(anyhow!(
            "unexpected status {}",
            status
        )));
    }

    log::trace!("{} {} answered with {}", method, response.url(), status);

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    response.json::<T>().await.map_err(|e| {
        log::debug!("Unable to decode response body: {}", e);
        GatewayError::request_failed(e)
    })
}

/// A write is only successful if the server hands back a persisted record
fn require_id(person: Person) -> GatewayResult<Person> {
    match person.id {
        Some(_) => Ok(person),
        None => Err(GatewayError::request_failed(anyhow!(
            "server returned a person without an id"
        ))),
    }
}
