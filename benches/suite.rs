use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathladder::graph::generators::{generate_grid, generate_random};
use pathladder::ladder::{generate_word_ladder, Dictionary};
use pathladder::{Dijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_dijkstra(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let random = generate_random(&mut rng, 10_000, 4.0, 100);
    let grid = generate_grid(100, 100);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_random_10k", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&random), 0))
    });
    c.bench_function("dijkstra_grid_100x100", |b| {
        b.iter(|| dijkstra.compute_shortest_paths(black_box(&grid), 0))
    });
}

fn bench_word_ladder(c: &mut Criterion) {
    // Every three-letter word over a small alphabet
    let letters = ['a', 'b', 'c', 'd', 'e', 'o', 's', 't'];
    let mut words = Vec::new();
    for x in letters {
        for y in letters {
            for z in letters {
                words.push(format!("{}{}{}", x, y, z));
            }
        }
    }
    let dictionary = Dictionary::from_words(&words);

    c.bench_function("word_ladder_512_words", |b| {
        b.iter(|| generate_word_ladder(black_box("abc"), black_box("tso"), &dictionary))
    });
}

criterion_group!(benches, bench_dijkstra, bench_word_ladder);
criterion_main!(benches);
