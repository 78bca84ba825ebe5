// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_deck_content(slides: usize) -> String {
    let slide = "# Class-based views\n.fx: larger\n\nSome paragraph about generic views.\n\n- ListView\n  - paginate_by\n- DetailView\n\n```python\nclass ArticleList(ListView):\n    model = Article\n```\n\n<img src=\"img/cbv.png\" width=\"600\">\n\n# Presenter Notes\n\nShow the MRO diagram.\n";
    vec![slide; slides].join("\n---\n\n")
}
