use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tokio::task::JoinSet;

use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;

use crate::error::ClientError;
use crate::gateway::{DeleteOutcome, ProductGateway, ProductPage};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct IdBody {
    id: ProductId,
}

#[derive(Debug, Deserialize)]
struct FieldErrorBody {
    msg: String,
}

/// Either error shape the API produces.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Option<Vec<FieldErrorBody>>,
    error: Option<String>,
}

/// HTTP client for the product API.
#[derive(Clone)]
pub struct ProductService {
    client: Client,
    base_url: String,
}

impl ProductService {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return resp
                .json::<T>()
                .await
                .map_err(|_| ClientError::UnexpectedResponse(status.as_u16()));
        }

        let Ok(body) = resp.json::<ErrorBody>().await else {
            return Err(ClientError::UnexpectedResponse(status.as_u16()));
        };

        match (status, body) {
            (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    errors: Some(errors),
                    ..
                },
            ) => Err(ClientError::Validation(
                errors.into_iter().map(|e| e.msg).collect(),
            )),
            (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: Some(message),
                    ..
                },
            ) => Err(ClientError::NotFound(message)),
            (
                _,
                ErrorBody {
                    error: Some(message),
                    ..
                },
            ) => Err(ClientError::Server(message)),
            _ => Err(ClientError::UnexpectedResponse(status.as_u16())),
        }
    }
}

#[async_trait]
impl ProductGateway for ProductService {
    async fn list(&self, page: u32, page_size: u32) -> Result<ProductPage, ClientError> {
        let resp = self
            .client
            .get(self.products_url())
            .query(&[("page", page), ("pageSize", page_size)])
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let resp = self
            .client
            .post(self.products_url())
            .json(draft)
            .send()
            .await?;
        let envelope: Envelope<Product> = Self::handle_response(resp).await?;
        Ok(envelope.data)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<ProductId, ClientError> {
        let resp = self
            .client
            .put(self.product_url(id))
            .json(draft)
            .send()
            .await?;
        let envelope: Envelope<IdBody> = Self::handle_response(resp).await?;
        Ok(envelope.data.id)
    }

    async fn delete(&self, id: ProductId) -> Result<ProductId, ClientError> {
        let resp = self.client.delete(self.product_url(id)).send().await?;
        let envelope: Envelope<IdBody> = Self::handle_response(resp).await?;
        Ok(envelope.data.id)
    }

    async fn delete_many(&self, ids: Vec<ProductId>) -> Vec<DeleteOutcome> {
        let mut tasks = JoinSet::new();
        for (index, id) in ids.iter().copied().enumerate() {
            let service = self.clone();
            tasks.spawn(async move { (index, service.delete(id).await) });
        }

        let mut results: Vec<Option<Result<ProductId, ClientError>>> =
            ids.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(err) => tracing::error!("Delete task failed: {}", err),
            }
        }

        ids.into_iter()
            .zip(results)
            .map(|(id, result)| DeleteOutcome {
                id,
                result: result.unwrap_or_else(|| {
                    Err(ClientError::Task(format!("delete of {id} did not finish")))
                }),
            })
            .collect()
    }
}
