use crate::extract::{ExtractMode, Extractor};
use crate::fetch::{self, Source};
use crate::metrics::{spawn_reporter, Metrics};
use crate::options::{InputMode, Options};
use crate::output::{build_writers, WordRecord};
use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

fn read_url_list(path: &Path) -> Result<Vec<Source>> {
    let f = File::open(path).with_context(|| format!("open url list {}", path.display()))?;
    let mut sources = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        match url::Url::parse(s) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {
                sources.push(Source::Url(s.to_string()));
            }
            _ => warn!(entry = %s, "skipping url list entry, not an absolute http(s) url"),
        }
    }
    Ok(sources)
}

pub fn collect_sources(opt: &Options) -> Result<Vec<Source>> {
    match &opt.mode {
        InputMode::Url(u) => Ok(vec![Source::Url(u.clone())]),
        InputMode::File(p) => Ok(vec![Source::File(p.clone())]),
        InputMode::List(p) => read_url_list(p),
    }
}

/// Fan out one fetch+extract task per source, bounded by `threads` permits,
/// and union the per-task token sets after the join barrier.
///
/// Each task owns its result set and hands it back through its join handle;
/// a failed fetch degrades to an empty set and never aborts siblings.
pub async fn aggregate(
    opt: &Options,
    sources: Vec<Source>,
    metrics: Arc<Metrics>,
) -> Result<HashSet<String>> {
    let mode = if opt.all { ExtractMode::All } else { ExtractMode::Suffix };
    let extractor = Arc::new(Extractor::new(&opt.extensions, mode)?);
    let client = fetch::build_client(opt.timeout)?;
    let headers = Arc::new(fetch::header_map(&opt.headers));
    metrics.total.store(sources.len() as u64, Ordering::Relaxed);

    let sem = Arc::new(Semaphore::new(opt.threads));
    let mut tasks = FuturesUnordered::new();
    for source in sources {
        let permit = sem.clone().acquire_owned().await.unwrap();
        let client = client.clone();
        let headers = headers.clone();
        let extractor = extractor.clone();
        let metrics_task = metrics.clone();
        let delay = opt.delay;
        tasks.push(tokio::spawn(async move {
            let _p = permit;
            match fetch::fetch(&client, &source, &headers, delay).await {
                Ok(text) => {
                    let set = extractor.extract(&text);
                    metrics_task.fetched.fetch_add(1, Ordering::Relaxed);
                    metrics_task
                        .words
                        .fetch_add(set.len() as u64, Ordering::Relaxed);
                    debug!(%source, words = set.len(), "extracted");
                    set
                }
                Err(e) => {
                    metrics_task.failed.fetch_add(1, Ordering::Relaxed);
                    warn!(%source, error = %e, "fetch failed");
                    HashSet::new()
                }
            }
        }));
    }

    // join barrier: every task reaches a terminal state before the union
    let mut words: HashSet<String> = HashSet::new();
    while let Some(res) = tasks.next().await {
        match res {
            Ok(set) => words.extend(set),
            Err(e) => warn!("task join error: {}", e),
        }
    }
    Ok(words)
}

pub async fn run(opt: Options) -> Result<()> {
    let sources = collect_sources(&opt)?;
    let metrics = Metrics::new();
    if !opt.silent {
        eprintln!(
            "[harvest] {} source(s) | threads={} delay={}s mode={}",
            sources.len(),
            opt.threads,
            opt.delay,
            if opt.all { "all" } else { "suffix" }
        );
    }
    let reporter = if matches!(opt.mode, InputMode::List(_)) && opt.progress && !opt.silent {
        Some(spawn_reporter(metrics.clone(), opt.progress_interval))
    } else {
        None
    };

    let words = aggregate(&opt, sources, metrics.clone()).await?;

    if let Some(r) = reporter {
        r.abort();
        eprintln!();
    }

    if words.is_empty() {
        // explicit signal; no output file is created for an empty run
        eprintln!("[result] no words found");
        return Ok(());
    }

    let writers = build_writers(
        opt.output.clone(),
        &opt.output_type,
        !opt.not_print,
        opt.gzip,
        opt.append,
    )?;
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort();
    for w in sorted {
        let rec = WordRecord { word: w.clone() };
        for ow in writers.iter() {
            let _ = ow.write(&rec);
        }
    }
    // close writers to ensure flush (gzip trailers etc.)
    for ow in writers.iter() {
        let _ = ow.close();
    }

    if !opt.silent {
        eprintln!(
            "[result] {} unique words from {}/{} source(s)",
            words.len(),
            metrics.fetched.load(Ordering::Relaxed),
            metrics.total.load(Ordering::Relaxed)
        );
    }
    Ok(())
}
