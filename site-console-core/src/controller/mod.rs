//! 发布流程视图状态控制器
//!
//! [`ProvisioningController`] 拥有本地草稿，并在每次读取服务端状态后把草稿与之合并。
//! 所有写操作都需要 `&mut self`，因此同一会话内的变更天然串行。
//!
//! 合并规则：
//!
//! - 发布标志或服务端子域名相对上一次快照发生变化（或首次加载）时，若服务端报告已发布且有子域名，
//!   该子域名覆盖本地候选与确认值，并视为已校验；
//! - 服务端域名与上一次看到的不同且非空时，仅当草稿未被用户编辑、或草稿仍等于上一次的服务端域名时，
//!   才复制到草稿；用户正在编辑的内容不会被覆盖；
//! - 服务端没有域名且用户未编辑过草稿时，填入默认域名；
//! - 其余情况保留草稿不动。

mod draft;


pub use draft::ProvisioningDraft;

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, PreconditionFailure};
use crate::services::ProvisioningService;
use crate::types::{ConsoleSettings, PublicationState, ServerState};
use crate::validation::ValidationOutcome;

/// Owns the provisioning form state for one console session.
pub struct ProvisioningController {
    service: Arc<ProvisioningService>,
    settings: ConsoleSettings,
    draft: ProvisioningDraft,
    server: Option<ServerState>,
    needs_refresh: bool,
}

impl ProvisioningController {
    #[must_use]
    pub fn new(service: Arc<ProvisioningService>, settings: ConsoleSettings) -> Self {
        Self {
            service,
            settings,
            draft: ProvisioningDraft::default(),
            server: None,
            needs_refresh: true,
        }
    }

    pub fn draft(&self) -> &ProvisioningDraft {
        &self.draft
    }

    /// Last server snapshot, `None` until the first successful load.
    pub fn server(&self) -> Option<&ServerState> {
        self.server.as_ref()
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn service(&self) -> &Arc<ProvisioningService> {
        &self.service
    }

    /// Whether the last attempt to read server state failed.
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    // ===== 服务端状态 =====

    /// 读取服务端状态（走缓存）并合并到草稿
    pub async fn load(&mut self) -> CoreResult<()> {
        match self.service.server_state().await {
            Ok(state) => {
                self.reconcile(state);
                self.needs_refresh = false;
                Ok(())
            }
            Err(e) => {
                self.needs_refresh = true;
                Err(e)
            }
        }
    }

    /// 强制失效全部缓存后重新读取
    pub async fn refresh(&mut self) -> CoreResult<()> {
        self.service.queries().invalidate_all().await;
        self.load().await
    }

    /// Merge a fresh server snapshot into the draft.
    pub fn reconcile(&mut self, next: ServerState) {
        let previous = self.server.take();

        let publication_changed = previous
            .as_ref()
            .is_none_or(|p| p.published != next.published || p.subdomain != next.subdomain);
        if publication_changed {
            if let Some(subdomain) = next.published_subdomain() {
                log::debug!("Adopting published subdomain '{subdomain}'");
                self.draft.adopt_published(subdomain);
            }
        }

        let previous_domain = previous.as_ref().and_then(ServerState::configured_domain);
        match next.configured_domain() {
            Some(domain) if previous_domain != Some(domain) => {
                let draft = self.draft.custom_domain();
                if !self.draft.is_domain_touched() || previous_domain == Some(draft) {
                    self.draft.set_custom_domain(domain, true);
                } else {
                    log::info!(
                        "Server domain changed to '{domain}', keeping edited draft '{draft}'"
                    );
                }
            }
            Some(_) => {}
            None if !self.draft.is_domain_touched() => {
                let default = self.settings.default_custom_domain.clone();
                self.draft.set_custom_domain(&default, false);
            }
            None => {}
        }

        self.server = Some(next);
    }

    /// 变更成功后重新读取；失败只记录日志
    async fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.load().await {
            log::warn!("Server state refresh after mutation failed: {e}");
        }
    }

    // ===== 子域名草稿 =====

    pub fn edit_subdomain(&mut self, text: &str) -> CoreResult<()> {
        if !self.can_edit_subdomain() {
            return Err(PreconditionFailure::SubdomainLocked.into());
        }
        self.draft.set_candidate(text);
        Ok(())
    }

    /// Run the naming rules; on success the normalized name becomes the confirmed subdomain.
    pub fn validate_candidate(&mut self) -> CoreResult<String> {
        match self.draft.validate() {
            ValidationOutcome::Valid => Ok(self.draft.confirmed().unwrap_or_default().to_string()),
            ValidationOutcome::Invalid(reason) => {
                log::debug!("Subdomain '{}' rejected: {reason}", self.draft.candidate());
                Err(CoreError::Validation(reason))
            }
        }
    }

    /// 清空候选、校验结果与确认值（“选择其他名称”）
    ///
    /// 已发布时拒绝：服务端子域名只在发布状态变化时才会重新写入草稿。
    pub fn reset_draft(&mut self) -> CoreResult<()> {
        if self.is_published() {
            return Err(PreconditionFailure::SubdomainLocked.into());
        }
        self.draft.clear_subdomain();
        Ok(())
    }

    // ===== 自定义域名草稿 =====

    pub fn edit_custom_domain(&mut self, text: &str) {
        self.draft.set_custom_domain(text, true);
    }

    // ===== 远程变更 =====

    /// Publish the confirmed subdomain. Returns the URL the site is live at.
    pub async fn publish(&mut self) -> CoreResult<String> {
        let Some(subdomain) = self.draft.confirmed().map(str::to_string) else {
            return Err(PreconditionFailure::NoConfirmedSubdomain.into());
        };
        if !self.draft.is_ready() {
            return Err(PreconditionFailure::NotValidated.into());
        }
        if self.is_published() {
            return Err(PreconditionFailure::AlreadyPublished.into());
        }

        self.service.publish(&subdomain).await?;
        self.refresh_after_mutation().await;

        let live_url = self
            .server
            .as_ref()
            .and_then(ServerState::configured_domain)
            .map(str::to_string)
            .or_else(|| {
                let draft_domain = self.draft.custom_domain().trim();
                (!draft_domain.is_empty()).then(|| draft_domain.to_string())
            })
            .unwrap_or_else(|| self.settings.platform_url(&subdomain));
        Ok(live_url)
    }

    pub async fn unpublish(&mut self) -> CoreResult<()> {
        if !self.is_published() {
            return Err(PreconditionFailure::NotPublished.into());
        }

        self.service.unpublish().await?;
        self.refresh_after_mutation().await;
        Ok(())
    }

    /// Configure `text` (trimmed) as the custom domain. Returns the configured domain.
    pub async fn configure_domain(&mut self, text: &str) -> CoreResult<String> {
        let domain = text.trim().to_string();
        if domain.is_empty() {
            return Err(PreconditionFailure::EmptyDomain.into());
        }

        self.service.configure_domain(&domain).await?;
        self.draft.set_custom_domain(&domain, true);
        self.refresh_after_mutation().await;
        Ok(domain)
    }

    /// [`Self::configure_domain`] with the current draft text.
    pub async fn configure_draft_domain(&mut self) -> CoreResult<String> {
        let text = self.draft.custom_domain().to_string();
        self.configure_domain(&text).await
    }

    /// 清空远程存储与全部本地状态
    pub async fn reset_all(&mut self) -> CoreResult<()> {
        self.service.reset_site_storage().await?;

        self.draft = ProvisioningDraft::with_default_domain(&self.settings.default_custom_domain);
        self.server = None;
        self.refresh_after_mutation().await;
        Ok(())
    }

    // ===== 派生值 =====

    pub fn is_published(&self) -> bool {
        self.server.as_ref().is_some_and(|s| s.published)
    }

    pub fn publication_state(&self) -> PublicationState {
        self.draft.publication_state(self.is_published())
    }

    /// The server subdomain while published, otherwise the confirmed one.
    pub fn display_subdomain(&self) -> Option<&str> {
        self.server
            .as_ref()
            .and_then(ServerState::published_subdomain)
            .or_else(|| self.draft.confirmed())
    }

    /// Configured custom domain, else `{subdomain}.{platform}` when a subdomain is known.
    pub fn primary_url(&self) -> Option<String> {
        if let Some(domain) = self.server.as_ref().and_then(ServerState::configured_domain) {
            return Some(domain.to_string());
        }
        self.display_subdomain()
            .map(|subdomain| self.settings.platform_url(subdomain))
    }

    /// Preview URL for whatever is typed in the subdomain field.
    pub fn preview_url(&self) -> Option<String> {
        let name = crate::validation::normalize(self.draft.candidate());
        (!name.is_empty()).then(|| self.settings.platform_url(&name))
    }

    // ===== 控件开关 =====

    pub fn can_edit_subdomain(&self) -> bool {
        !self.is_published() && self.draft.confirmed().is_none()
    }

    pub fn can_validate(&self) -> bool {
        self.can_edit_subdomain() && self.draft.has_candidate()
    }

    pub fn can_publish(&self) -> bool {
        !self.is_published() && self.draft.is_ready()
    }

    pub fn can_unpublish(&self) -> bool {
        self.is_published()
    }

    pub fn can_configure_domain(&self) -> bool {
        !self.draft.custom_domain().trim().is_empty()
    }
}
