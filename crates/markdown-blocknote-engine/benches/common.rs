// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "Signed up on 2025-10-07T18:31:00.162Z\n\nFirst outreach call, see https://example.com/crm/records/42 for context\nhttps://github.com/org/repo/issues/1 - follow up next week\n   \nPlain line without any links at all\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_link_heavy_line(links: usize) -> String {
    (0..links)
        .map(|i| format!("ref {i} https://example.com/{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}
