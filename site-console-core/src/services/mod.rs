//! 业务逻辑服务层

mod provisioning_service;

pub use provisioning_service::ProvisioningService;
