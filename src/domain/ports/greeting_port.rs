//! Remote greeting service port definition.

use async_trait::async_trait;

use crate::domain::entities::Greeting;
use crate::domain::errors::GreetError;

/// Port for the remote `greet` operation.
#[async_trait]
pub trait GreetingPort: Send + Sync {
    /// Calls the remote greeting operation with the name, verbatim.
    async fn greet(&self, name: &str) -> Result<Greeting, GreetError>;

    /// Checks greeting service availability.
    async fn health_check(&self) -> Result<(), GreetError>;
}
