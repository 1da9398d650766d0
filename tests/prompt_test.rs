use skillscope::llm::prompts::{analysis_prompt, full_input, SYSTEM_PREAMBLE};

#[test]
fn test_prompt_embeds_both_descriptions_verbatim() {
    let prompt = analysis_prompt("造成100點傷害", "造成150點傷害，並暈眩1秒");

    assert!(prompt.contains("造成100點傷害"));
    assert!(prompt.contains("造成150點傷害，並暈眩1秒"));
    assert!(prompt.contains("舊版本描述"));
    assert!(prompt.contains("新版本描述"));
}

#[test]
fn test_prompt_requests_all_four_analyses() {
    let prompt = analysis_prompt("a", "b");

    assert!(prompt.contains("內容一致性檢查"));
    assert!(prompt.contains("描述合理性分析"));
    assert!(prompt.contains("中文文法檢查"));
    assert!(prompt.contains("建議改進"));
}

#[test]
fn test_prompt_specifies_status_markers_and_severity() {
    let prompt = analysis_prompt("a", "b");

    assert!(prompt.contains("✅"));
    assert!(prompt.contains("❌"));
    assert!(prompt.contains("⚠️"));
    assert!(prompt.contains("輕微/中等/嚴重"));
}

#[test]
fn test_prompt_does_not_trim_or_escape_input() {
    // Validation happens in the handler; the template passes text through
    // untouched.
    let prompt = analysis_prompt("  spaced  ", "<b>markup</b> \"quoted\"");

    assert!(prompt.contains("  spaced  "));
    assert!(prompt.contains("<b>markup</b> \"quoted\""));
}

#[test]
fn test_full_input_prepends_system_preamble() {
    let input = full_input("舊", "新");

    assert!(input.starts_with(SYSTEM_PREAMBLE));
    assert!(input.contains("舊版本描述"));
}

#[test]
fn test_prompt_handles_multiline_descriptions() {
    let old = "第一行\n第二行\n第三行";
    let prompt = analysis_prompt(old, "新描述");

    assert!(prompt.contains(old));
}
