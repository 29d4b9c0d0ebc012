//! Factory Engine
//!
//! The object every generated proxy delegates to. An engine only exists once
//! each method of its contract has been verified against the binding that
//! will answer it; from then on it is immutable and serves calls from any
//! number of threads.

use std::fmt;
use std::sync::Arc;

use tracing::{info, trace};
use tyf_domain::error::Result;
use tyf_domain::{AnyValue, FactoryContract, FactoryInvoker, FactoryMethodDescriptor, ResolverHandle};

use crate::dispatch::DispatchMap;

/// Observable lifecycle of a verified engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Serving calls
    Ready,
    /// The owning container is gone; every call fails
    Disposed,
}

/// Verified dispatcher for one factory contract
pub struct FactoryEngine {
    contract: &'static str,
    dispatch: Arc<DispatchMap>,
    resolver: ResolverHandle,
}

impl FactoryEngine {
    /// Verify every method in `methods` and return a ready engine
    ///
    /// Fails with the first error found; no engine exists in that case.
    pub fn verify(
        contract: &'static str,
        dispatch: Arc<DispatchMap>,
        methods: &[FactoryMethodDescriptor],
        resolver: ResolverHandle,
    ) -> Result<Self> {
        for method in methods {
            dispatch
                .binding_for(method)?
                .verify_signature(method, &resolver)?;
        }

        info!(
            contract,
            methods = methods.len(),
            bindings = dispatch.len(),
            "Verified typed factory"
        );

        Ok(Self {
            contract,
            dispatch,
            resolver,
        })
    }

    /// Verify the methods declared by contract `C`
    pub fn for_contract<C: FactoryContract + ?Sized>(
        dispatch: Arc<DispatchMap>,
        resolver: ResolverHandle,
    ) -> Result<Self> {
        Self::verify(C::contract_name(), dispatch, &C::methods(), resolver)
    }

    /// Wrap the engine in the proxy of contract `C`
    pub fn into_proxy<C: FactoryContract + ?Sized>(self) -> Arc<C> {
        C::proxy(Arc::new(self))
    }

    /// Name of the served contract
    pub fn contract(&self) -> &'static str {
        self.contract
    }

    /// Routing table
    pub fn dispatch(&self) -> &DispatchMap {
        &self.dispatch
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        if self.resolver.is_disposed() {
            EngineState::Disposed
        } else {
            EngineState::Ready
        }
    }
}

impl FactoryInvoker for FactoryEngine {
    fn invoke(&self, method: &FactoryMethodDescriptor, args: Vec<AnyValue>) -> Result<AnyValue> {
        trace!(method = %method.full_name(), "Dispatching factory call");
        self.dispatch
            .binding_for(method)?
            .resolve_with_arguments(method, args, &self.resolver)
    }
}

impl fmt::Debug for FactoryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryEngine")
            .field("contract", &self.contract)
            .field("dispatch", &self.dispatch)
            .field("state", &self.state())
            .finish()
    }
}
