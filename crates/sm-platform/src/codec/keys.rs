//! [`PublicKeys`] wire conversion.

use crate::codec::Facade;
use crate::error::ConvertError;
use crate::model::PublicKeys;
use crate::wire::PublicKeysPb;

impl Facade for PublicKeys {
    type Wire = PublicKeysPb;

    fn to_wire(&self) -> PublicKeysPb {
        PublicKeysPb {
            enc_key: self.enc_key.clone(),
            sig_key: self.sig_key.clone(),
        }
    }

    fn from_wire(wire: PublicKeysPb) -> Result<Self, ConvertError> {
        Ok(PublicKeys {
            enc_key: wire.enc_key,
            sig_key: wire.sig_key,
        })
    }
}
