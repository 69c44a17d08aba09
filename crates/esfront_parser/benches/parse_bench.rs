use criterion::{black_box, criterion_group, criterion_main, Criterion};
use esfront_core::Arena;
use esfront_parser::parse_program;

// A medium-size module exercising most statement and expression forms.
const SOURCE: &str = r#"
import { EventEmitter } from 'events';
import * as path from 'path';

const DEFAULTS = { retries: 3, timeout: 1000, verbose: false };

export class TaskQueue extends EventEmitter {
    static instances = 0;

    constructor(options = {}) {
        super();
        this.options = { ...DEFAULTS, ...options };
        this.pending = [];
        this.running = 0;
        TaskQueue.instances++;
    }

    get size() {
        return this.pending.length + this.running;
    }

    push(task, priority = 0) {
        const entry = { task, priority, attempts: 0 };
        let index = this.pending.findIndex(e => e.priority < priority);
        if (index === -1) {
            this.pending.push(entry);
        } else {
            this.pending.splice(index, 0, entry);
        }
        this.emit('queued', entry);
        return this;
    }

    async run() {
        while (this.pending.length > 0) {
            const { task, attempts } = this.pending.shift();
            try_: for (let i = attempts; i < this.options.retries; i++) {
                const ok = task(i);
                if (ok) break try_;
            }
        }
    }

    *entries() {
        for (const entry of this.pending) yield entry;
    }
}

function describe(value) {
    switch (typeof value) {
        case 'number':
            return value % 1 === 0 ? 'integer' : 'float';
        case 'string':
            return `string of length ${value.length}`;
        default:
            return value === null ? 'null' : 'object';
    }
}

export const normalize = (p) => path.join(...p.split(/\/+/g).filter(Boolean));

export default function main(args) {
    const queue = new TaskQueue({ verbose: args.includes('-v') });
    for (const key in DEFAULTS) {
        queue.push(() => describe(DEFAULTS[key]), key.length);
    }
    do {
        queue.running = queue.running >> 1 | 0;
    } while (queue.running > 0 && !queue.options.verbose);
    return queue.run();
}
"#;

fn bench_parse_module(c: &mut Criterion) {
    c.bench_function("parse_module_medium", |b| {
        b.iter(|| {
            let arena = Arena::new();
            let program = parse_program(&arena, black_box(SOURCE));
            black_box(program.is_ok());
        });
    });
}

criterion_group!(benches, bench_parse_module);
criterion_main!(benches);
