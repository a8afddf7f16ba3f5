use criterion::{black_box, criterion_group, criterion_main, Criterion};
use teamsort_core::draw::{draw_teams, DrawRequest};
use teamsort_core::partition::partition_with;
use teamsort_core::player::Player;
use teamsort_core::shuffle::RandomShuffler;
use teamsort_core::stats::team_stats;

fn create_roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p{}", i), format!("Player{}", i), (i % 10) as i64))
        .collect()
}

fn bench_partition(c: &mut Criterion) {
    let players = create_roster(1000);

    c.bench_function("partition_1000_players_8_teams", |b| {
        let mut shuffler = RandomShuffler::seeded(42);
        b.iter(|| partition_with(black_box(&players), 8, None, &mut shuffler))
    });
}

fn bench_team_stats(c: &mut Criterion) {
    let levels: Vec<i64> = (0..1000).map(|i| i % 10).collect();

    c.bench_function("team_stats_1000_levels", |b| {
        b.iter(|| team_stats(black_box(&levels)))
    });
}

fn bench_draw(c: &mut Criterion) {
    let players = create_roster(200);
    let request = DrawRequest {
        num_teams: 10,
        max_team_size: Some(15),
    };

    c.bench_function("draw_200_players_10_teams", |b| {
        let mut shuffler = RandomShuffler::seeded(42);
        b.iter(|| draw_teams(black_box(&players), request, &mut shuffler))
    });
}

criterion_group!(benches, bench_partition, bench_team_stats, bench_draw);
criterion_main!(benches);
