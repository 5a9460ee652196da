use serde::de::DeserializeOwned;

/// Removes markdown code-fence markers that chat models wrap around JSON.
pub fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

pub fn parse_llm_json<T: DeserializeOwned>(content: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(content))
}
