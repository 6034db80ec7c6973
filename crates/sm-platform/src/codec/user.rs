//! [`User`] wire conversion.

use crate::codec::Facade;
use crate::error::ConvertError;
use crate::model::User;
use crate::wire::UserPb;

impl Facade for User {
    type Wire = UserPb;

    fn to_wire(&self) -> UserPb {
        UserPb {
            alias: self.alias.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    fn from_wire(wire: UserPb) -> Result<Self, ConvertError> {
        Ok(User {
            alias: wire.alias,
            name: wire.name,
            email: wire.email,
        })
    }
}
