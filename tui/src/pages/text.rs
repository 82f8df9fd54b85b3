use std::sync::mpsc;

use ratatui::{
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget, Wrap},
};
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState,
    traits::{Actions, Component},
    Event,
};

const INSTRUCTIONS: &str = "\
How to use the Swarm dashboard

1. Connect your wallet
   Open the Connect Wallet page and press Enter. The dashboard asks the \
wallet provider for account access and resolves the signer and network. \
If the provider sits on the wrong network, a warning banner appears and \
Enter asks the provider to switch to Arbitrum One.

2. Watch token prices
   The Token Price Chart page lists the tokens known to the price feed. \
Pick one with the arrow keys and press Enter to load its 1-minute close \
prices. Left and Right move the chart cursor; the readout shows the \
open, high, low and close of the cursored candle.

3. PhysicalTokenTransfer vouchers
   Token transfers on the Swarm protocol happen through password \
protected vouchers, handled by the external PhysicalTokenTransfer \
contract:
   - Create Voucher: deposit ETH or ERC20 tokens and generate a \
password. The voucher gets a unique identifier linked to the tokens. \
Store the password securely.
   - Transfer Voucher: hand the voucher to another party by setting a \
new password hash. The recipient needs the correct password to redeem.
   - Redeem Voucher: provide the correct password hash and the tokens \
are transferred to your wallet. A wrong password fails the redemption.
   - Fee Management: each operation carries a small fee that sustains \
the ecosystem.

Before interacting with vouchers make sure that your wallet is \
connected, that you are on the correct network, and that the voucher \
password is stored safely.";

const WHITE_PAPER: &str = "\
PhysicalTokenTransfer - Swarm protocol white paper (abridged)

Overview
   PhysicalTokenTransfer enables secure token transfers via password \
protected vouchers in a decentralized and trustless environment. It \
supports ETH and ERC20 tokens and is designed for use in DeFi \
platforms and dApps.

Mechanism
   Users deposit tokens into the contract. A unique voucher ID and a \
hashed password are generated. Vouchers are transferred by changing \
the password associated with the voucher, and redemption is only \
possible by the correct password holder. A fee on each transaction \
sustains the ecosystem.

Security
   Passwords are hashed with Keccak256. Transfer control stays with \
the current voucher holder, and pause/unpause functionality protects \
against potential vulnerabilities.

Use cases
   - P2P transfers with secure, password protected vouchers.
   - Decentralized escrow services for token transactions.
   - Token gifting with redemption via password protected vouchers.

The SwarmOracle and SwarmExecutor components coordinate off-chain \
agents against the protocol; they are external services and are not \
part of this dashboard.";

#[derive(Debug)]
pub struct TextPage {
    pub text: String,
}

impl TextPage {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn instructions() -> Self {
        Self::new(INSTRUCTIONS.to_string())
    }

    pub fn white_paper() -> Self {
        Self::new(WHITE_PAPER.to_string())
    }
}

impl Component for TextPage {
    fn handle_event(
        &mut self,
        _event: &Event,
        _area: Rect,
        _transmitter: &mpsc::Sender<Event>,
        _shutdown_signal: &CancellationToken,
        _shared_state: &SharedState,
    ) -> crate::Result<Actions> {
        Ok(Actions::default())
    }

    fn render_component(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        _shared_state: &SharedState,
    ) -> Rect
    where
        Self: Sized,
    {
        Paragraph::new(Text::raw(&self.text))
            .wrap(Wrap { trim: false })
            .render(area, buf);

        area
    }
}
