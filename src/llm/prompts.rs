//! Fixed analysis prompt for comparing two skill description revisions.

/// Role line prepended to every prompt before it is sent to the model.
pub const SYSTEM_PREAMBLE: &str = "你是一個專業的遊戲技能描述分析師，擅長發現技能描述中的問題。";

/// Embed both descriptions verbatim in the fixed analysis template.
/// Pure formatting; validation is the caller's job.
pub fn analysis_prompt(old_description: &str, new_description: &str) -> String {
    format!(
        r#"請作為一個專業的遊戲技能描述分析師，對比以下兩個技能描述版本：

舊版本描述：
{old_description}

新版本描述：
{new_description}

請進行以下分析，並使用清晰的格式：

1. 內容一致性檢查：
   - 兩個版本的技能內容是否相同？
   - 是否有遺漏或新增的技能效果？
   - 數值、條件、觸發機制是否一致？

2. 描述合理性分析：
   - 新描述是否符合遊戲邏輯？
   - 是否有描述不清晰或矛盾的地方？
   - 技能效果描述是否完整？

3. 中文文法檢查：
   - 語句是否通順？
   - 用詞是否準確？
   - 是否有語法錯誤？
   - 標點符號使用是否正確？

4. 建議改進：
   - 針對發現的問題提供具體改進建議
   - 提供更優雅的表達方式

請以結構化的方式回答，使用以下格式：
- 對於通過的項目使用 ✅ 符號
- 對於有問題的項目使用 ❌ 符號
- 對於需要注意的項目使用 ⚠️ 符號
- 標明每個問題的嚴重程度（輕微/中等/嚴重）
"#
    )
}

/// The full model input: role preamble followed by the analysis template.
pub fn full_input(old_description: &str, new_description: &str) -> String {
    format!(
        "{}\n\n{}",
        SYSTEM_PREAMBLE,
        analysis_prompt(old_description, new_description)
    )
}
