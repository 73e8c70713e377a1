use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdem_engine::cards::{evaluator, Card};

fn seven_card_hand() -> Vec<Card> {
    let mut deck = holdem_engine::cards::Deck::new(42);
    deck.deal_n(7).unwrap()
}

fn bench_evaluator(c: &mut Criterion) {
    let hand = seven_card_hand();
    c.bench_function("evaluate 7 cards", |b| {
        b.iter(|| evaluator::evaluate(black_box(&hand)))
    });
}

criterion_group!(benches, bench_evaluator);
criterion_main!(benches);
