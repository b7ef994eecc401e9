//! Generation Throughput Benchmarks
//!
//! Measures a full run (engines, rendering, template) over synthetic schemas
//! shaped like the Debug Adapter Protocol: one request, response, and event per
//! command, each with an Arguments or Body type referencing a pool of shared
//! record types.
//!
//! # Schema Sizes
//!
//! - **Small**: 10 commands
//! - **Medium**: 50 commands (roughly the size of DAP itself)
//! - **Large**: 250 commands

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wirebind_codegen::{build_unit, generate};
use wirebind_core::{CompositeType, FieldDescriptor, FieldType, GeneratorConfig, Schema};

const SHARED_TYPES: usize = 8;

fn create_schema(commands: usize) -> Schema {
    let mut schema = Schema::new();

    for i in 0..SHARED_TYPES {
        let mut ty = CompositeType::new(format!("Shared{i}"))
            .with_field(FieldDescriptor::new("id", FieldType::Int64))
            .with_field(FieldDescriptor::new("label", FieldType::String).optional());
        if i > 0 {
            ty = ty.with_field(
                FieldDescriptor::new("parent", FieldType::reference(format!("Shared{}", i - 1)))
                    .optional(),
            );
        }
        schema.others.push(ty);
    }

    for i in 0..commands {
        let name = format!("Command{i:03}");
        let shared = format!("Shared{}", i % SHARED_TYPES);

        schema.requests.push(CompositeType::new(format!("{name}Request")));
        schema.responses.push(CompositeType::new(format!("{name}Response")));
        schema.events.push(CompositeType::new(format!("{name}Event")));

        schema.others.push(
            CompositeType::new(format!("{name}Arguments"))
                .with_field(FieldDescriptor::new("target", FieldType::reference(&shared)))
                .with_field(FieldDescriptor::new("force", FieldType::Boolean).optional()),
        );
        schema.others.push(
            CompositeType::new(format!("{name}ResponseBody")).with_field(FieldDescriptor::new(
                "items",
                FieldType::array(FieldType::reference(&shared)),
            )),
        );
        schema.others.push(
            CompositeType::new(format!("{name}EventBody"))
                .with_field(FieldDescriptor::new("reason", FieldType::String))
                .with_field(FieldDescriptor::new("progress", FieldType::Double).optional()),
        );
    }

    schema
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let config = GeneratorConfig::default();

    for commands in [10, 50, 250] {
        let schema = create_schema(commands);
        group.throughput(Throughput::Elements(schema.all_types().count() as u64));

        group.bench_with_input(
            BenchmarkId::new("full_run", commands),
            &schema,
            |b, schema| b.iter(|| generate(black_box(schema), &config)),
        );

        group.bench_with_input(
            BenchmarkId::new("build_unit", commands),
            &schema,
            |b, schema| b.iter(|| build_unit(black_box(schema), &config.naming)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
