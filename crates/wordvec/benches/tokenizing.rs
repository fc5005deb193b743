#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use wordvec::tokenizers::{TextTokenizer, TokenizerKind};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_SAMPLE: &str = "The quick brown fox jumps over the lazy dog. \
It's a beautiful day -- and I'll be taking my 3 dogs for a walk... \
Don't forget: the doughnut costs $10.48, or so (they say)! ";

fn english_text() -> String {
    ENGLISH_SAMPLE.repeat(200)
}

#[divan::bench(args = [TokenizerKind::Whitespace, TokenizerKind::NaivePunct, TokenizerKind::Punct])]
fn tokenize(
    bencher: Bencher,
    kind: TokenizerKind,
) {
    let text = english_text();
    let tokenizer = kind.build().unwrap();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| tokenizer.tokenize(black_box(&text)).len());
}
