//! Peer ranking.

use workpulse_core::errors::PeerError;
use workpulse_core::events::types::PeersRankedEvent;
use workpulse_core::events::EventDispatcher;
use workpulse_core::peers_span;
use workpulse_core::types::Company;

use crate::feature_space::FeatureSpace;
use crate::similarity::cosine_similarity;

/// A candidate peer and its similarity to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerMatch<'a> {
    pub company: &'a Company,
    pub similarity: f64,
}

/// Rank `companies` by similarity to `target`, most similar first.
///
/// Every company sharing the target's key is excluded. Ties keep their
/// collection order.
pub fn rank_peers<'a>(
    target: &Company,
    companies: &'a [Company],
    space: &FeatureSpace,
) -> Vec<PeerMatch<'a>> {
    let _span = peers_span!(target.key).entered();

    let target_vec = space.vector(target);
    let mut peers: Vec<PeerMatch<'a>> = companies
        .iter()
        .filter(|c| c.key != target.key)
        .map(|company| PeerMatch {
            company,
            similarity: cosine_similarity(&target_vec, &space.vector(company)),
        })
        .collect();

    peers.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    tracing::debug!(
        candidates = companies.len(),
        peers = peers.len(),
        top = peers.first().map(|p| p.company.key.as_str()).unwrap_or(""),
        "peers ranked"
    );
    peers
}

/// Look the target up by key, then rank.
pub fn rank_peers_by_key<'a>(
    key: &str,
    companies: &'a [Company],
    space: &FeatureSpace,
) -> Result<Vec<PeerMatch<'a>>, PeerError> {
    let target = companies
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| PeerError::UnknownCompany(key.to_string()))?;
    Ok(rank_peers(target, companies, space))
}

/// [`rank_peers_by_key`], reporting the outcome to `dispatcher`.
pub fn rank_peers_observed<'a>(
    key: &str,
    companies: &'a [Company],
    space: &FeatureSpace,
    dispatcher: &EventDispatcher,
) -> Result<Vec<PeerMatch<'a>>, PeerError> {
    let peers = rank_peers_by_key(key, companies, space)?;
    dispatcher.emit_peers_ranked(&PeersRankedEvent {
        company_key: key.to_string(),
        peer_count: peers.len(),
        top_peer: peers.first().map(|p| p.company.key.clone()),
    });
    Ok(peers)
}
