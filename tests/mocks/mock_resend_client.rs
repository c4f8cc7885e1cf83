use async_trait::async_trait;
use contact_relay::client::AsyncResendClient;
use contact_relay::domain::{ContactId, EmailId};
use contact_relay::error::{ResendApiError, ResendApiResult};
use contact_relay::models::{CreateContactRequest, CreatedContact, SendEmailRequest, SentEmail};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Mock Resend client for testing.
///
/// Responses are scripted per operation and handed out in order. Once a
/// script runs dry every further call fails with `ResendApiError::Other`.
/// Calls are counted and the last request of each kind is kept.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockResendClient {
    contact_results: Arc<Mutex<VecDeque<ResendApiResult<CreatedContact>>>>,
    email_results: Arc<Mutex<VecDeque<ResendApiResult<SentEmail>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    last_api_key: Arc<Mutex<Option<String>>>,
    last_contact_request: Arc<Mutex<Option<CreateContactRequest>>>,
    last_email_request: Arc<Mutex<Option<SendEmailRequest>>>,
}

#[allow(dead_code)]
impl MockResendClient {
    /// Create a mock with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful contact creation.
    pub fn push_contact_ok(&self, id: &str) {
        self.contact_results.lock().unwrap().push_back(Ok(CreatedContact {
            object: "contact".to_string(),
            id: ContactId::new(id).unwrap(),
        }));
    }

    /// Script a failed contact creation.
    pub fn push_contact_err(&self, error: ResendApiError) {
        self.contact_results.lock().unwrap().push_back(Err(error));
    }

    /// Script an accepted email.
    pub fn push_email_ok(&self, id: &str) {
        self.email_results.lock().unwrap().push_back(Ok(SentEmail {
            id: EmailId::new(id).unwrap(),
        }));
    }

    /// Script a failed email send.
    pub fn push_email_err(&self, error: ResendApiError) {
        self.email_results.lock().unwrap().push_back(Err(error));
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last_api_key.lock().unwrap().clone()
    }

    pub fn last_contact_request(&self) -> Option<CreateContactRequest> {
        self.last_contact_request.lock().unwrap().clone()
    }

    pub fn last_email_request(&self) -> Option<SendEmailRequest> {
        self.last_email_request.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str, api_key: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        *self.last_api_key.lock().unwrap() = Some(api_key.to_string());
    }
}

#[async_trait]
impl AsyncResendClient for MockResendClient {
    async fn create_contact(
        &self,
        api_key: &str,
        request: &CreateContactRequest,
    ) -> ResendApiResult<CreatedContact> {
        self.track_call("create_contact", api_key);
        *self.last_contact_request.lock().unwrap() = Some(request.clone());

        self.contact_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ResendApiError::Other("no scripted response".to_string())))
    }

    async fn send_email(
        &self,
        api_key: &str,
        request: &SendEmailRequest,
    ) -> ResendApiResult<SentEmail> {
        self.track_call("send_email", api_key);
        *self.last_email_request.lock().unwrap() = Some(request.clone());

        self.email_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ResendApiError::Other("no scripted response".to_string())))
    }
}
