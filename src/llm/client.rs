use anyhow::Result;
use async_trait::async_trait;

/// One outbound text-generation call. The credential is a per-call parameter
/// because end users supply their own API key with every analysis request;
/// nothing is stored server-side.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String>;
}

/// Canned client for tests and local development. Never touches the network.
pub struct MockCompletionClient;

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        _api_key: &str,
        prompt: &str,
        _max_output_tokens: u32,
    ) -> Result<String> {
        if prompt.contains("舊版本描述") {
            Ok([
                "1. 內容一致性檢查：✅ 兩個版本的技能內容相同。",
                "2. 描述合理性分析：✅ 新描述符合遊戲邏輯。",
                "3. 中文文法檢查：⚠️ 標點符號使用需注意（輕微）。",
                "4. 建議改進：無重大問題。",
            ]
            .join("\n"))
        } else {
            Ok("（無內容返回）".to_string())
        }
    }
}
