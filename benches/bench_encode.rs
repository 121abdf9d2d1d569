use criterion::{Criterion, black_box, criterion_group, criterion_main};

use msglink_lib::message::Message;

fn bench_rtf_escape(c: &mut Criterion) {
    let subject = "Re: Überprüfung der Rechnung {Q3} \u{1f4e7} \u{2014} bitte prüfen".repeat(8);
    c.bench_function("rtf_escape_mixed", |b| {
        b.iter(|| {
            let _ = msglink_lib::rtf::escape(black_box(&subject));
        })
    });
}

fn bench_build_payload(c: &mut Criterion) {
    let message = Message::new(
        "Ann <ann@example.com>",
        "Quarterly report \u{2014} final",
        "CAF=abc123+def@mail.example.com",
    );
    c.bench_function("build_payload_markdown", |b| {
        b.iter(|| {
            let _ = msglink_lib::payload::build(black_box(&message), true);
        })
    });
}

criterion_group!(benches, bench_rtf_escape, bench_build_payload);
criterion_main!(benches);
