use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skillpath_core::evaluator::evaluate;
use skillpath_core::model::{
    AnswerOptions, AnswerSheet, Choice, Difficulty, Question, Quiz, QuizMetadata, SubmittedAnswer,
};
use skillpath_core::profiler::derive_profile;
use skillpath_core::roadmap::build_roadmap;
use skillpath_core::traits::extract_json_from_markdown;

fn make_quiz(question_count: u32) -> Quiz {
    let questions = (1..=question_count)
        .map(|n| Question {
            id: format!("q{n}"),
            number: n,
            difficulty: match n % 3 {
                0 => Difficulty::Advanced,
                1 => Difficulty::Beginner,
                _ => Difficulty::Intermediate,
            },
            topic: format!("Topic {}", n % 5),
            prompt: format!("Question {n}?"),
            code: None,
            options: AnswerOptions {
                a: "first".into(),
                b: "second".into(),
                c: "third".into(),
                d: "fourth".into(),
            },
            correct_option: Choice::B,
            explanation: "Because.".into(),
        })
        .collect();

    Quiz {
        metadata: QuizMetadata {
            total_questions: question_count,
            estimated_time: 15,
        },
        questions,
    }
}

fn make_answers(quiz: &Quiz) -> AnswerSheet {
    quiz.questions
        .iter()
        .map(|q| {
            let pick = if q.number % 2 == 0 { Choice::B } else { Choice::A };
            (
                q.id.clone(),
                SubmittedAnswer {
                    selected_option: Some(pick),
                },
            )
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for count in [10u32, 50, 200] {
        let quiz = make_quiz(count);
        let answers = make_answers(&quiz);
        group.bench_function(format!("{count}_questions"), |b| {
            b.iter(|| evaluate(black_box(&quiz), black_box(&answers), black_box(600)))
        });
    }

    let quiz = make_quiz(50);
    let empty: AnswerSheet = HashMap::new();
    group.bench_function("50_questions_unanswered", |b| {
        b.iter(|| evaluate(black_box(&quiz), black_box(&empty), black_box(600)))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let quiz = make_quiz(10);
    let answers = make_answers(&quiz);

    group.bench_function("evaluate_profile_roadmap", |b| {
        b.iter(|| {
            let evaluation = evaluate(black_box(&quiz), black_box(&answers), 600);
            let profile = derive_profile(&evaluation, 5);
            build_roadmap("Python", profile.skill_level.as_str(), &profile.weaknesses, 5)
        })
    });

    group.finish();
}

fn bench_json_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_json");

    let fenced = "Here you go:\n\n```json\n{\"metadata\": {\"total_questions\": 10}, \"questions\": []}\n```\n";
    let raw = "{\"weeks\": [{\"week\": 1}]}";
    let noisy = {
        let mut s = String::from("Let me think about that.\n");
        for _ in 0..40 {
            s.push_str("Some filler prose that is not JSON at all.\n");
        }
        s.push_str("```json\n{\"ok\": true}\n```\n");
        s
    };

    group.bench_function("fenced", |b| {
        b.iter(|| extract_json_from_markdown(black_box(fenced)))
    });
    group.bench_function("raw", |b| {
        b.iter(|| extract_json_from_markdown(black_box(raw)))
    });
    group.bench_function("noisy_prose", |b| {
        b.iter(|| extract_json_from_markdown(black_box(&noisy)))
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_pipeline, bench_json_extraction);
criterion_main!(benches);
