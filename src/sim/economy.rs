//! Per-player economy arena and the interfaces the rest of the simulation
//! sees it through.
//!
//! `EconomySystem` owns one `PlayerEconomy` slot per player id and runs the
//! budget cycle for every active slot on cycle ticks. Other systems talk to
//! it through two narrow traits:
//!
//! - [`EconomyQueryable`]: read-only queries (demand, services, UI).
//! - [`CreditProvider`]: generic spending by building logic.
//!
//! Queries against an unknown or inactive player return neutral defaults
//! rather than failing.

use crate::model::{
    BondIssued, BondType, DEFAULT_FUNDING_LEVEL, DEFAULT_TRIBUTE_RATE, EconomyEvent, ExpenseHistory,
    FundingLevelChanged, INITIAL_BALANCE, IncomeBreakdown, IncomeHistory, MAX_PLAYERS,
    OrdinanceChanged, OrdinanceState, OrdinanceType, PlayerId, ServiceType, TreasuryState,
    TributeRateChanged, ZoneType,
};

use super::bonds;
use super::budget_cycle::{
    self, BUDGET_CYCLE_TICKS, BudgetCycleInput, BudgetCycleResult, PhaseCosts,
};
use super::construction::{self, ConstructionCostResult};
use super::funding;
use super::ordinance;
use super::tribute_rate;

/// Everything the economy tracks for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEconomy {
    pub treasury: TreasuryState,
    pub ordinances: OrdinanceState,
    pub income_history: IncomeHistory,
    pub expense_history: ExpenseHistory,
    pub auto_bonds_enabled: bool,
    /// Latest population reported by the host, used to gate Large bonds.
    pub population: u32,
    pending_income: Option<IncomeBreakdown>,
    pending_costs: Option<PhaseCosts>,
}

impl PlayerEconomy {
    pub fn new() -> Self {
        Self::with_balance(INITIAL_BALANCE)
    }

    pub fn with_balance(balance: i64) -> Self {
        Self {
            treasury: TreasuryState::with_balance(balance),
            ordinances: OrdinanceState::new(),
            income_history: IncomeHistory::new(),
            expense_history: ExpenseHistory::new(),
            auto_bonds_enabled: true,
            population: 0,
            pending_income: None,
            pending_costs: None,
        }
    }

    /// Take the cached phase figures, leaving nothing behind for the next
    /// cycle. Missing figures count as zero.
    fn take_pending_input(&mut self) -> BudgetCycleInput {
        BudgetCycleInput {
            income: self.pending_income.take().unwrap_or_default(),
            costs: self.pending_costs.take().unwrap_or_default(),
        }
    }

    pub fn has_pending_input(&self) -> bool {
        self.pending_income.is_some() || self.pending_costs.is_some()
    }
}

impl Default for PlayerEconomy {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only economy queries for demand, service, and UI systems.
pub trait EconomyQueryable {
    fn get_tribute_rate(&self, zone: ZoneType, player: PlayerId) -> u8;
    fn get_average_tribute_rate(&self, player: PlayerId) -> f32;
    fn get_treasury_balance(&self, player: PlayerId) -> i64;
    fn can_afford(&self, amount: i64, player: PlayerId) -> bool;
    fn get_funding_level(&self, service: ServiceType, player: PlayerId) -> u8;
    fn get_last_income(&self, player: PlayerId) -> i64;
    fn get_last_expense(&self, player: PlayerId) -> i64;
    fn get_total_debt(&self, player: PlayerId) -> i64;
    fn get_bond_count(&self, player: PlayerId) -> usize;
    /// Whether the player could take out a Standard bond right now.
    fn can_issue_bond(&self, player: PlayerId) -> bool;
}

/// Generic spending interface for construction and building logic.
pub trait CreditProvider {
    fn deduct_credits(&mut self, player: PlayerId, amount: i64) -> bool;
    fn has_credits(&self, player: PlayerId, amount: i64) -> bool;
}

/// Credit provider that approves everything. Tallies what it was asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissiveCreditProvider {
    pub total_deducted: i64,
}

impl CreditProvider for PermissiveCreditProvider {
    fn deduct_credits(&mut self, _player: PlayerId, amount: i64) -> bool {
        self.total_deducted = self.total_deducted.saturating_add(amount);
        true
    }

    fn has_credits(&self, _player: PlayerId, _amount: i64) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct EconomySystem {
    players: [PlayerEconomy; MAX_PLAYERS],
    active: [bool; MAX_PLAYERS],
    cycle_ticks: u64,
    initial_balance: i64,
    auto_bonds_default: bool,
}

impl EconomySystem {
    pub fn new() -> Self {
        Self::with_settings(BUDGET_CYCLE_TICKS, INITIAL_BALANCE, true)
    }

    pub fn with_settings(cycle_ticks: u64, initial_balance: i64, auto_bonds_default: bool) -> Self {
        Self {
            players: std::array::from_fn(|_| PlayerEconomy::with_balance(initial_balance)),
            active: [false; MAX_PLAYERS],
            cycle_ticks,
            initial_balance,
            auto_bonds_default,
        }
    }

    pub fn cycle_ticks(&self) -> u64 {
        self.cycle_ticks
    }

    // -- Activation --

    /// Reset a slot to defaults and mark it active. Returns false for an
    /// out-of-range id.
    pub fn activate_player(&mut self, player: PlayerId) -> bool {
        let idx = player as usize;
        if idx >= MAX_PLAYERS {
            tracing::warn!(player, "activate_player: id out of range");
            return false;
        }
        let mut economy = PlayerEconomy::with_balance(self.initial_balance);
        economy.auto_bonds_enabled = self.auto_bonds_default;
        self.players[idx] = economy;
        self.active[idx] = true;
        tracing::debug!(player, balance = self.initial_balance, "player economy activated");
        true
    }

    pub fn deactivate_player(&mut self, player: PlayerId) {
        if let Some(slot) = self.active.get_mut(player as usize) {
            *slot = false;
        }
    }

    pub fn is_player_active(&self, player: PlayerId) -> bool {
        self.active.get(player as usize).copied().unwrap_or(false)
    }

    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..MAX_PLAYERS as PlayerId).filter(move |p| self.is_player_active(*p))
    }

    pub fn player(&self, player: PlayerId) -> Option<&PlayerEconomy> {
        self.is_player_active(player)
            .then(|| &self.players[player as usize])
    }

    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut PlayerEconomy> {
        if !self.is_player_active(player) {
            return None;
        }
        Some(&mut self.players[player as usize])
    }

    pub fn treasury(&self, player: PlayerId) -> Option<&TreasuryState> {
        self.player(player).map(|p| &p.treasury)
    }

    // -- Integration-layer input --

    /// Cache this phase's income. Consumed by the next budget cycle.
    pub fn set_phase_income(&mut self, player: PlayerId, income: IncomeBreakdown) {
        if let Some(economy) = self.player_mut(player) {
            economy.pending_income = Some(income);
        }
    }

    /// Cache this phase's upkeep. Consumed by the next budget cycle.
    pub fn set_phase_costs(
        &mut self,
        player: PlayerId,
        infrastructure: i64,
        service: i64,
        energy: i64,
    ) {
        if let Some(economy) = self.player_mut(player) {
            economy.pending_costs = Some(PhaseCosts {
                infrastructure,
                service,
                energy,
            });
        }
    }

    pub fn set_population(&mut self, player: PlayerId, population: u32) {
        if let Some(economy) = self.player_mut(player) {
            economy.population = population;
        }
    }

    pub fn set_auto_bonds_enabled(&mut self, player: PlayerId, enabled: bool) {
        if let Some(economy) = self.player_mut(player) {
            economy.auto_bonds_enabled = enabled;
        }
    }

    // -- Settlement --

    /// Advance to `current_tick`, settling every active player when the tick
    /// lands on a cycle boundary. Returns the notifications in player order.
    pub fn tick(&mut self, current_tick: u64) -> Vec<EconomyEvent> {
        if !budget_cycle::is_budget_cycle_tick(current_tick, self.cycle_ticks) {
            return Vec::new();
        }
        let phase = current_tick / self.cycle_ticks;
        self.run_budget_cycle(phase)
            .iter()
            .flat_map(BudgetCycleResult::events)
            .collect()
    }

    /// Settle every active player for `phase` regardless of tick alignment.
    pub fn run_budget_cycle(&mut self, phase: u64) -> Vec<BudgetCycleResult> {
        let mut results = Vec::new();
        for idx in 0..MAX_PLAYERS {
            if !self.active[idx] {
                continue;
            }
            let economy = &mut self.players[idx];
            let input = economy.take_pending_input();
            results.push(budget_cycle::process_budget_cycle(
                idx as PlayerId,
                economy,
                phase,
                &input,
            ));
        }
        results
    }

    // -- Player controls --

    pub fn set_tribute_rate(
        &mut self,
        player: PlayerId,
        zone: ZoneType,
        rate: i32,
    ) -> Option<TributeRateChanged> {
        let economy = self.player_mut(player)?;
        Some(tribute_rate::set_tribute_rate(&mut economy.treasury, zone, rate))
    }

    pub fn set_funding_level(
        &mut self,
        player: PlayerId,
        service: ServiceType,
        level: i32,
    ) -> Option<FundingLevelChanged> {
        let economy = self.player_mut(player)?;
        Some(funding::set_funding_level(&mut economy.treasury, service, level))
    }

    /// Manually issue a bond, using the player's last reported population.
    pub fn issue_bond(&mut self, player: PlayerId, bond_type: BondType) -> Option<BondIssued> {
        let economy = self.player_mut(player)?;
        let result = bonds::issue_bond(&mut economy.treasury, bond_type, economy.population);
        if !result.success {
            tracing::debug!(player, %bond_type, "bond issuance refused");
            return None;
        }
        tracing::info!(player, %bond_type, principal = result.principal, "bond issued");
        Some(BondIssued {
            bond_type,
            principal: result.principal,
        })
    }

    pub fn enable_ordinance(
        &mut self,
        player: PlayerId,
        ordinance: OrdinanceType,
    ) -> Option<OrdinanceChanged> {
        let economy = self.player_mut(player)?;
        ordinance::enable_ordinance(&mut economy.ordinances, ordinance)
    }

    pub fn disable_ordinance(
        &mut self,
        player: PlayerId,
        ordinance: OrdinanceType,
    ) -> Option<OrdinanceChanged> {
        let economy = self.player_mut(player)?;
        ordinance::disable_ordinance(&mut economy.ordinances, ordinance)
    }

    pub fn get_ordinance_effect(&self, player: PlayerId, ordinance: OrdinanceType) -> f32 {
        self.player(player)
            .map_or(1.0, |p| ordinance::get_effect_multiplier(&p.ordinances, ordinance))
    }

    /// Charge a player-initiated build. Refused when the balance cannot
    /// cover it.
    pub fn deduct_construction_cost(
        &mut self,
        player: PlayerId,
        cost: i64,
    ) -> ConstructionCostResult {
        match self.player_mut(player) {
            Some(economy) => construction::deduct_construction_cost(&mut economy.treasury, cost),
            None => ConstructionCostResult {
                success: false,
                amount_deducted: 0,
                remaining_balance: 0,
            },
        }
    }

    pub fn get_service_effectiveness(&self, player: PlayerId, service: ServiceType) -> f32 {
        funding::calculate_effectiveness(self.get_funding_level(service, player))
    }

    pub fn get_zone_demand_modifier(&self, player: PlayerId, zone: ZoneType) -> i32 {
        tribute_rate::calculate_tribute_demand_modifier(self.get_tribute_rate(zone, player))
    }
}

impl Default for EconomySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl EconomyQueryable for EconomySystem {
    fn get_tribute_rate(&self, zone: ZoneType, player: PlayerId) -> u8 {
        self.treasury(player)
            .map_or(DEFAULT_TRIBUTE_RATE, |t| tribute_rate::get_tribute_rate(t, zone))
    }

    fn get_average_tribute_rate(&self, player: PlayerId) -> f32 {
        self.treasury(player)
            .map_or(DEFAULT_TRIBUTE_RATE as f32, tribute_rate::get_average_tribute_rate)
    }

    fn get_treasury_balance(&self, player: PlayerId) -> i64 {
        self.treasury(player).map_or(0, |t| t.balance)
    }

    fn can_afford(&self, amount: i64, player: PlayerId) -> bool {
        self.treasury(player).is_some_and(|t| t.balance >= amount)
    }

    fn get_funding_level(&self, service: ServiceType, player: PlayerId) -> u8 {
        self.treasury(player)
            .map_or(DEFAULT_FUNDING_LEVEL, |t| funding::get_funding_level(t, service))
    }

    fn get_last_income(&self, player: PlayerId) -> i64 {
        self.treasury(player).map_or(0, |t| t.last_income.total)
    }

    fn get_last_expense(&self, player: PlayerId) -> i64 {
        self.treasury(player).map_or(0, |t| t.last_expense.total)
    }

    fn get_total_debt(&self, player: PlayerId) -> i64 {
        self.treasury(player).map_or(0, bonds::get_total_debt)
    }

    fn get_bond_count(&self, player: PlayerId) -> usize {
        self.treasury(player).map_or(0, |t| t.bond_count())
    }

    fn can_issue_bond(&self, player: PlayerId) -> bool {
        self.player(player).is_some_and(|p| {
            bonds::can_issue_bond(&p.treasury, BondType::Standard, p.population)
        })
    }
}

impl CreditProvider for EconomySystem {
    /// Succeeds for an active player even into deficit. Negative amounts
    /// are refused.
    fn deduct_credits(&mut self, player: PlayerId, amount: i64) -> bool {
        if amount < 0 {
            tracing::warn!(player, amount, "negative credit deduction rejected");
            return false;
        }
        match self.player_mut(player) {
            Some(economy) => {
                economy.treasury.balance = economy.treasury.balance.saturating_sub(amount);
                true
            }
            None => {
                tracing::warn!(player, amount, "deduct_credits for inactive player");
                false
            }
        }
    }

    fn has_credits(&self, player: PlayerId, amount: i64) -> bool {
        self.can_afford(amount, player)
    }
}
