#[macro_use]
extern crate criterion;
extern crate holdem_advisor;
extern crate rand;

use criterion::Criterion;
use holdem_advisor::core::{Deck, FlatDeck, Hand, Rankable};
use rand::{SeedableRng, rngs::StdRng};

fn rank_one(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let d: FlatDeck = Deck::default().into();
    let hand = Hand::new_with_cards(d.sample(&mut rng, 5));
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| hand.rank()));
}

fn rank_best_seven(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let d: FlatDeck = Deck::default().into();
    let hand = Hand::new_with_cards(d.sample(&mut rng, 7));
    c.bench_function("Rank best 5 card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

criterion_group!(benches, rank_one, rank_best_seven);
criterion_main!(benches);
