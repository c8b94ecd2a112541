//! Automated trading controls state.

/// Whether the automated trading loop is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradingStatus {
    #[default]
    Stopped,
    Running,
}

/// The editable trading parameters, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradingParam {
    MaxTrades,
    StopLoss,
    TakeProfit,
    TradeAmount,
}

/// Parameter display order.
pub const TRADING_PARAMS: &[TradingParam] = &[
    TradingParam::MaxTrades,
    TradingParam::StopLoss,
    TradingParam::TakeProfit,
    TradingParam::TradeAmount,
];

/// Automated trading controls: run status, editable parameters and the
/// strategies currently armed.
#[derive(Debug, Clone)]
pub struct TradingState {
    /// Run status.
    pub status: TradingStatus,
    /// Maximum trades per session.
    pub max_trades: u32,
    /// Stop loss, percent.
    pub stop_loss: f64,
    /// Take profit, percent.
    pub take_profit: f64,
    /// Stake per trade.
    pub trade_amount: f64,
    /// Selected parameter index (into [`TRADING_PARAMS`]).
    pub selected_param: usize,
    /// Names of armed strategies. Empty until strategies are built.
    pub active_strategies: Vec<String>,
}

impl Default for TradingState {
    fn default() -> Self {
        Self {
            status: TradingStatus::Stopped,
            max_trades: 10,
            stop_loss: 5.0,
            take_profit: 10.0,
            trade_amount: 1.0,
            selected_param: 0,
            active_strategies: Vec::new(),
        }
    }
}

impl TradingState {
    pub fn is_running(&self) -> bool {
        self.status == TradingStatus::Running
    }

    /// Start the trading loop. No-op while already running.
    pub fn start(&mut self) {
        if self.status == TradingStatus::Stopped {
            self.status = TradingStatus::Running;
            tracing::info!(
                max_trades = self.max_trades,
                stop_loss = self.stop_loss,
                take_profit = self.take_profit,
                trade_amount = self.trade_amount,
                "auto trading started"
            );
        }
    }

    /// Stop the trading loop. No-op while already stopped.
    pub fn stop(&mut self) {
        if self.status == TradingStatus::Running {
            self.status = TradingStatus::Stopped;
            tracing::info!("auto trading stopped");
        }
    }

    /// The currently selected parameter.
    pub fn selected_param(&self) -> TradingParam {
        TRADING_PARAMS[self.selected_param.min(TRADING_PARAMS.len() - 1)]
    }

    /// Move parameter selection, wrapping around.
    pub fn move_param_selection(&mut self, delta: i32) {
        let len = TRADING_PARAMS.len() as i32;
        let current = self.selected_param as i32;
        self.selected_param = ((current + delta).rem_euclid(len)) as usize;
    }

    /// Adjust the selected parameter by one step in the given direction.
    /// Values never go below zero.
    pub fn adjust_selected(&mut self, direction: i32) {
        let up = direction > 0;
        match self.selected_param() {
            TradingParam::MaxTrades => {
                self.max_trades = if up {
                    self.max_trades.saturating_add(1)
                } else {
                    self.max_trades.saturating_sub(1)
                };
            }
            TradingParam::StopLoss => {
                self.stop_loss = step(self.stop_loss, 1.0, up);
            }
            TradingParam::TakeProfit => {
                self.take_profit = step(self.take_profit, 1.0, up);
            }
            TradingParam::TradeAmount => {
                self.trade_amount = step(self.trade_amount, 0.1, up);
            }
        }
    }
}

fn step(value: f64, size: f64, up: bool) -> f64 {
    if up {
        value + size
    } else {
        (value - size).max(0.0)
    }
}
