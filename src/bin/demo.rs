//! Console demo: runs a handful of review sentences through the
//! dictionary classifier, then a small statistical experiment per
//! corpus/classifier pair.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_sentiment_analyzer::classify::ClassifierKind;
use review_sentiment_analyzer::engine::{CorpusKind, EngineConfig, SentimentEngine};

const DEMO_SENTENCES: &[&str] = &[
    "剁椒鸡蛋好咸,土豆丝很好吃",
    "要是米饭再多点儿就好了",
    "要是米饭再多点儿就更好了",
    "不太好吃，相当难吃，要是米饭再多点儿就好了",
    "味道很好，服务也不错",
    "太难吃了，再也不来了",
    "一般般，没什么特色",
    "非常满意，下次还会再来",
];

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    let config = EngineConfig::from_toml()?;
    let engine = SentimentEngine::new(config);

    println!("== dictionary classifier ==");
    for sentence in DEMO_SENTENCES {
        let label = engine.analyse(sentence)?;
        let verdict = if label == 1 { "positive" } else { "negative" };
        println!("{verdict}  {sentence}");
    }

    println!("\n== statistical classifiers ==");
    for corpus in [CorpusKind::Takeout, CorpusKind::Hotel] {
        for classifier in [ClassifierKind::Bayes, ClassifierKind::Knn, ClassifierKind::Svm] {
            let mut config = engine.config().clone();
            config.statistical.corpus = corpus;
            config.statistical.classifier = classifier;
            let report = SentimentEngine::new(config).run_experiment()?;
            println!(
                "{:?}/{:?}: accuracy {:.2}, precision {:.2}, recall {:.2}",
                report.corpus, report.classifier, report.accuracy, report.precision, report.recall
            );
        }
    }

    Ok(())
}
