use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizrun_core::model::{DisplaySettings, Question, QuestionBank, QuestionKind, QuizConfig};
use quizrun_core::planner::plan;

fn make_quiz(groups: usize, alternatives: usize, randomize_order: bool) -> (QuizConfig, QuestionBank) {
    let mut bank = QuestionBank::new();
    let mut question_groups = Vec::with_capacity(groups);

    for g in 0..groups {
        let mut group = Vec::with_capacity(alternatives);
        for a in 0..alternatives {
            let id = format!("q{g:03}_{a}");
            bank.insert(Question {
                id: id.clone(),
                prompt: format!("Question {g}, variant {a}"),
                answers: vec!["true".into()],
                kind: QuestionKind::TrueFalse,
            });
            group.push(id);
        }
        question_groups.push(group);
    }

    let config = QuizConfig {
        title: "Bench".into(),
        time_limit: 0,
        randomize_order,
        passing_score: 0,
        question_groups,
        settings: DisplaySettings::default(),
    };
    (config, bank)
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");

    let (config, bank) = make_quiz(20, 3, false);
    group.bench_function("20x3_ordered", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| plan(black_box(&config), black_box(&bank), &mut rng))
    });

    let (config, bank) = make_quiz(20, 3, true);
    group.bench_function("20x3_shuffled", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| plan(black_box(&config), black_box(&bank), &mut rng))
    });

    let (config, bank) = make_quiz(500, 5, true);
    group.bench_function("500x5_shuffled", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| plan(black_box(&config), black_box(&bank), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
