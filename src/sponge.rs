//======================================================================
// src/sponge.rs
// Sha3Core: plugs the engine into the `digest` core API so that
// CoreWrapper provides buffering, `Digest`, `Reset` and cloning.
//======================================================================

use core::fmt;
use core::marker::PhantomData;

use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    typenum::{IsLess, Le, NonZero, U256},
    HashMarker, Output, Reset,
};

use crate::engine::Sha3Engine;
use crate::variant::Sha3Params;

/// Block-level SHA-3 core for the variant described by `P`.
///
/// Use it through [`CoreWrapper`](digest::core_api::CoreWrapper), see the
/// `Sha3_*` aliases at the crate root. The wrapper's eager block buffer
/// hands full blocks to [`UpdateCore::update_blocks`] and always keeps the
/// final partial block short of a full rate.
#[derive(Clone)]
pub struct Sha3Core<P: Sha3Params> {
    engine: Sha3Engine,
    _params: PhantomData<P>,
}

impl<P: Sha3Params> Sha3Core<P> {
    /// The engine behind this core.
    pub fn engine(&self) -> &Sha3Engine {
        &self.engine
    }
}

impl<P: Sha3Params> Default for Sha3Core<P> {
    fn default() -> Self {
        Self {
            engine: Sha3Engine::new(P::VARIANT),
            _params: PhantomData,
        }
    }
}

impl<P: Sha3Params> HashMarker for Sha3Core<P> {}

impl<P: Sha3Params> BlockSizeUser for Sha3Core<P> {
    type BlockSize = P::BlockSize;
}

impl<P: Sha3Params> BufferKindUser for Sha3Core<P> {
    type BufferKind = Eager;
}

impl<P: Sha3Params> OutputSizeUser for Sha3Core<P> {
    type OutputSize = P::OutputSize;
}

impl<P: Sha3Params> UpdateCore for Sha3Core<P> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.engine.absorb_block(block);
        }
    }
}

impl<P: Sha3Params> FixedOutputCore for Sha3Core<P>
where
    P::BlockSize: IsLess<U256>,
    Le<P::BlockSize, U256>: NonZero,
{
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let pos = buffer.get_pos();
        let block = buffer.pad_with_zeros();
        self.engine.finalize_into(block, pos, out);
    }
}

impl<P: Sha3Params> Reset for Sha3Core<P> {
    #[inline]
    fn reset(&mut self) {
        self.engine.reset();
    }
}

impl<P: Sha3Params> AlgorithmName for Sha3Core<P> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(P::VARIANT.name())
    }
}

impl<P: Sha3Params> fmt::Debug for Sha3Core<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha3Core<{}> {{ ... }}", P::VARIANT.name())
    }
}
