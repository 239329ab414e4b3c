use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::Request;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("signup refused with status {status}")]
    Refused { status: u16 },
    #[error("could not reach the signup service: {0}")]
    Transport(String),
    #[error("could not encode the signup: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailingList {
    Beta,
    Newsletter,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub list: MailingList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ack;

pub type SignupFuture = Pin<Box<dyn Future<Output = Result<Ack, RejectionReason>>>>;

/// Where captured emails go.
pub trait SignupTransport {
    fn submit(&self, request: SignupRequest) -> SignupFuture;
}

/// Logs the signup and acknowledges it. Used when no endpoint is configured.
pub struct ConsoleTransport;

impl SignupTransport for ConsoleTransport {
    fn submit(&self, request: SignupRequest) -> SignupFuture {
        info!("{:?} signup: {}", request.list, request.email);
        Box::pin(async { Ok(Ack) })
    }
}

pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SignupTransport for HttpTransport {
    fn submit(&self, request: SignupRequest) -> SignupFuture {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let response = Request::post(&endpoint)
                .json(&request)
                .map_err(|e| RejectionReason::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RejectionReason::Transport(e.to_string()))?;

            if response.ok() {
                Ok(Ack)
            } else {
                Err(RejectionReason::Refused {
                    status: response.status(),
                })
            }
        })
    }
}

/// Shared handle to a transport, cheap to clone into props.
#[derive(Clone)]
pub struct SignupClient(Rc<dyn SignupTransport>);

impl SignupClient {
    pub fn new(transport: impl SignupTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }

    /// Transport picked from build configuration.
    pub fn from_config() -> Self {
        match config::signup_endpoint() {
            Some(endpoint) => {
                info!("Signups go to {}", endpoint);
                Self::new(HttpTransport::new(endpoint))
            }
            None => Self::new(ConsoleTransport),
        }
    }

    pub fn submit(&self, request: SignupRequest) -> SignupFuture {
        self.0.submit(request)
    }
}

impl PartialEq for SignupClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let request = SignupRequest {
            email: "a@b.com".to_string(),
            list: MailingList::Newsletter,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"email": "a@b.com", "list": "newsletter"})
        );
    }

    #[test]
    fn clients_compare_by_transport() {
        let a = SignupClient::new(ConsoleTransport);
        let b = a.clone();
        let c = SignupClient::new(ConsoleTransport);
        assert!(a == b);
        assert!(a != c);
    }
}
