use honggfuzz::fuzz;
use rowlife::{classify, read, Pattern, TransitionTable};

fn main() {
    let table = TransitionTable::compute();
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            let Ok(pattern) = Pattern::parse(text) else {
                return;
            };
            let next = read(&pattern, &table);
            assert_eq!(next.is_empty(), next.runs().is_empty());
            let _ = classify(&pattern, &table, 100);
        });
    }
}
