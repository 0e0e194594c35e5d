mod chain_tip_provider;

pub use chain_tip_provider::ChainTipProvider;
