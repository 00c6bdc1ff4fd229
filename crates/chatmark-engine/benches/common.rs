// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "## Update\n\nHere is the **plan** with `inline code` and a [link](https://example.com).\n\n- first point\n- second point\n1. numbered step\n\nTotal = Rp40.000.000 * 1.03 for this month.\n\n```rust\nfn example() {\n    println!(\"hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn stream_chunks(content: &str) -> Vec<&str> {
    content.lines().collect()
}
