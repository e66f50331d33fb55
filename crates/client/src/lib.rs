pub mod error;
pub mod http;
pub mod models;
pub mod result;
pub mod service;

pub use error::ClientError;
pub use http::AgentClient;
pub use models::{AlertInfo, JobHistoryInfo, JobInfo, JobStepInfo, OperatorInfo, ProxyInfo};
pub use result::OperationResult;
pub use service::{JobManagementService, JobVerb, ServiceResult};
