// Criterion benchmarks for Finder Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finder_algo::core::{classify, Matcher};
use finder_algo::models::{Mood, Project, QuizAnswers};

const CATEGORIES: &[&str] = &["Gifts", "Home Decor", "Kitchen", "Baby", "Seasonal"];
const TIME_ESTIMATES: &[&str] = &["4-6 hrs", "8-12 hrs", "16-20 hrs"];
const MACHINES: &[&[&str]] = &[&[], &["AccuQuilt"], &["Embroidery"], &["AccuQuilt", "Embroidery"]];

fn create_project(id: usize) -> Project {
    Project {
        id: id as i64,
        title: format!("Project {}", id),
        category: vec![CATEGORIES[id % CATEGORIES.len()].to_string()],
        time_estimate: TIME_ESTIMATES[id % TIME_ESTIMATES.len()].to_string(),
        is_stash_buster: id % 3 == 0,
        machines_required: MACHINES[id % MACHINES.len()]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        skill_level: "Intermediate".to_string(),
        image_url: None,
        accuquilt_pattern_url: None,
        notion_instructions_url: None,
    }
}

fn create_answers() -> QuizAnswers {
    QuizAnswers {
        project_types: vec!["gifts".to_string(), "seasonal".to_string()],
        mood: Mood::Quick,
        machines: vec!["accuquilt".to_string(), "embroidery".to_string()],
        selected_die_id: None,
    }
}

fn bench_build_criteria(c: &mut Criterion) {
    let matcher = Matcher::new();
    let answers = create_answers();

    c.bench_function("build_criteria", |b| {
        b.iter(|| matcher.build_criteria(black_box(&answers)));
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(Mood::StashBuster)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let answers = create_answers();

    let mut group = c.benchmark_group("matching");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Project> = (0..*catalog_size).map(create_project).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(black_box(&answers), black_box(catalog.clone()))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_criteria, bench_classify, bench_matching);
criterion_main!(benches);
