pub mod mock_resend_client;

pub use mock_resend_client::MockResendClient;
