use hesiod_tip_domain::{BlockHash, BlockHeader, Config};
use hesiod_tip_infrastructure::chain::{import_headers, load_headers, ChainTipStore, HeaderChain};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Genesis plus the optional headers file; the tip is published as it moves.
pub fn build_chain(config: &Config) -> anyhow::Result<(HeaderChain, Arc<ChainTipStore>)> {
    let genesis = BlockHeader::new(
        BlockHash::from_hex(&config.chain.genesis_hash)?,
        BlockHash::zero(),
        config.chain.genesis_time,
    );

    let store = Arc::new(ChainTipStore::new());
    let mut chain = HeaderChain::new(genesis, store.clone(), config.chain.max_tip_age);

    let now = unix_now();

    if let Some(path) = &config.chain.headers_file {
        let headers = load_headers(Path::new(path))?;
        info!(path = %path, count = headers.len(), "Importing headers");
        import_headers(&mut chain, &headers, now);
    }

    let tip = chain.tip();
    info!(
        height = tip.height,
        hash = %tip.hash,
        synced = chain.is_synced(now),
        "Chain tip ready"
    );

    Ok((chain, store))
}

fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}
